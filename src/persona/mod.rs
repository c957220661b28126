//! 人设策略模块
//!
//! 三个互斥的人设策略变体，部署时通过配置选定一个，不支持按请求切换。
//! 提示词由档案字段 + 固定人设规则确定性渲染。

pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::models::user_record::UserProfile;

/// 人设策略变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PersonaVariant {
    /// 单段回答 + 推荐讲道标记
    #[default]
    #[serde(rename = "simple")]
    Simple,

    /// 两段结构（일반 답변 / 심층 분석），停用推荐替换
    #[serde(rename = "two_section")]
    TwoSection,

    /// 两段结构 + 元抱怨/碎片输入的道歉分支
    #[serde(rename = "two_section_exception")]
    TwoSectionException,
}

impl PersonaVariant {
    /// 该变体是否在回复中解析推荐讲道标记
    pub fn resolves_sermon_marker(&self) -> bool {
        matches!(self, PersonaVariant::Simple)
    }
}

/// 系统提示词构建器
///
/// 对同一档案和同一变体，构建结果逐字节确定。
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    variant: PersonaVariant,
}

impl PromptBuilder {
    /// 以指定变体创建构建器
    pub fn new(variant: PersonaVariant) -> Self {
        Self { variant }
    }

    /// 当前生效的变体
    pub fn variant(&self) -> PersonaVariant {
        self.variant
    }

    /// 渲染系统提示词
    pub fn build(&self, profile: &UserProfile) -> String {
        let template = match self.variant {
            PersonaVariant::Simple => prompts::SIMPLE,
            PersonaVariant::TwoSection => prompts::TWO_SECTION,
            PersonaVariant::TwoSectionException => prompts::TWO_SECTION_EXCEPTION,
        };

        template
            .replace("{name}", profile.display_name())
            .replace("{region}", field(&profile.region))
            .replace("{job}", field(&profile.job))
            .replace("{age}", field(&profile.age))
            .replace("{gender}", field(&profile.gender))
    }
}

/// 缺失字段渲染为 `None` 占位符，与既有日志数据保持一致
fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_kim() -> UserProfile {
        UserProfile {
            name: Some("Kim".into()),
            region: Some("Seoul".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_prompt_embeds_profile_fields() {
        let prompt = PromptBuilder::new(PersonaVariant::Simple).build(&profile_kim());

        assert!(prompt.contains("Kim"));
        assert!(prompt.contains("Seoul"));
        assert!(!prompt.contains("성도님"));
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let prompt = PromptBuilder::new(PersonaVariant::Simple).build(&UserProfile::default());

        assert!(prompt.contains("익명 님"));
        assert!(prompt.contains("거주지역: None"));
        assert!(prompt.contains("직업: None"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::new(PersonaVariant::TwoSection);
        assert_eq!(builder.build(&profile_kim()), builder.build(&profile_kim()));
    }

    #[test]
    fn test_simple_prompt_requests_marker() {
        let prompt = PromptBuilder::new(PersonaVariant::Simple).build(&profile_kim());
        assert!(prompt.contains("[추천 설교: 제목]"));
    }

    #[test]
    fn test_two_section_prompt_has_sections_and_no_marker() {
        let prompt = PromptBuilder::new(PersonaVariant::TwoSection).build(&profile_kim());

        assert!(prompt.contains("[일반 답변]"));
        assert!(prompt.contains("[심층 분석]"));
        assert!(!prompt.contains("[추천 설교"));
        assert!(prompt.contains("성별"));
    }

    #[test]
    fn test_exception_prompt_carries_apology_branch() {
        let prompt = PromptBuilder::new(PersonaVariant::TwoSectionException).build(&profile_kim());

        assert!(prompt.contains("죄송합니다"));
        assert!(prompt.contains("무슨 말인지 모르겠어요"));
        assert!(prompt.contains("[일반 답변]"));
        assert!(prompt.contains("[심층 분석]"));
    }

    #[test]
    fn test_marker_resolution_only_for_simple() {
        assert!(PersonaVariant::Simple.resolves_sermon_marker());
        assert!(!PersonaVariant::TwoSection.resolves_sermon_marker());
        assert!(!PersonaVariant::TwoSectionException.resolves_sermon_marker());
    }

    #[test]
    fn test_honorific_rule_present_in_all_variants() {
        for variant in [
            PersonaVariant::Simple,
            PersonaVariant::TwoSection,
            PersonaVariant::TwoSectionException,
        ] {
            let prompt = PromptBuilder::new(variant).build(&profile_kim());
            assert!(prompt.contains("'님'을 붙여"), "variant {variant:?}");
            assert!(!prompt.contains("성도님"), "variant {variant:?}");
        }
    }
}
