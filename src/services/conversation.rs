//! 对话服务
//!
//! 编排一次对话请求的完整路径：识别用户 → 载入并覆盖档案 →
//! 构建系统提示词 → 调用上游模型 → 回复后处理（推荐讲道替换）→
//! 追加历史并落盘 → 返回最终回复。

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::catalog::SermonCatalog;
use crate::error::Result;
use crate::llm::ChatModel;
use crate::models::user_record::{Exchange, UserProfile};
use crate::persona::{PersonaVariant, PromptBuilder};
use crate::storage::UserStore;

/// 回复中的推荐讲道标记，捕获组为标题
static SERMON_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[추천 설교: (.*?)\]").expect("valid marker pattern"));

/// 对话服务 trait
#[async_trait]
pub trait ConversationService: Send + Sync {
    /// 处理一次对话请求，返回最终回复文本
    async fn handle(&self, message: &str, profile: UserProfile) -> Result<String>;
}

/// 对话服务实现
pub struct ConversationServiceImpl {
    store: Arc<dyn UserStore>,
    model: Arc<dyn ChatModel>,
    catalog: Arc<SermonCatalog>,
    prompt_builder: PromptBuilder,
}

impl ConversationServiceImpl {
    /// 创建新的服务实例
    pub fn new(
        store: Arc<dyn UserStore>,
        model: Arc<dyn ChatModel>,
        catalog: Arc<SermonCatalog>,
        variant: PersonaVariant,
    ) -> Self {
        Self {
            store,
            model,
            catalog,
            prompt_builder: PromptBuilder::new(variant),
        }
    }

    /// 解析并替换回复中的推荐讲道标记
    ///
    /// 目录中找不到相近标题时，标记原样留在回复里。
    fn resolve_sermon_marker(&self, reply: &str) -> String {
        let Some(caps) = SERMON_MARKER.captures(reply) else {
            return reply.to_string();
        };

        let marker = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let title = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

        match self.catalog.find_best(title) {
            Some(sermon) => {
                info!("Sermon matched for marker title: {}", title);
                reply.replace(
                    marker,
                    &format!("\n\n이 고민에 도움이 될 설교입니다.\n{}", sermon.url),
                )
            }
            None => {
                debug!("No sermon cleared the cutoff for: {}", title);
                reply.to_string()
            }
        }
    }
}

#[async_trait]
impl ConversationService for ConversationServiceImpl {
    async fn handle(&self, message: &str, profile: UserProfile) -> Result<String> {
        // 展示名就是存储键：同名用户共享同一条记录
        let user_id = profile.display_name().to_string();
        debug!("Handling chat request for user: {}", user_id);

        let mut record = self.store.load(&user_id).await;
        record.profile = profile;

        let system_prompt = self.prompt_builder.build(&record.profile);
        let reply = self.model.complete(&system_prompt, message).await?;

        let final_reply = if self.prompt_builder.variant().resolves_sermon_marker() {
            self.resolve_sermon_marker(&reply)
        } else {
            reply
        };

        record.push_exchange(Exchange::now(message, &final_reply));
        self.store.save(&user_id, &record).await?;

        Ok(final_reply)
    }
}

/// 创建对话服务
pub fn create_conversation_service(
    store: Arc<dyn UserStore>,
    model: Arc<dyn ChatModel>,
    catalog: Arc<SermonCatalog>,
    variant: PersonaVariant,
) -> Box<dyn ConversationService> {
    Box::new(ConversationServiceImpl::new(store, model, catalog, variant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::llm::MockChatModel;
    use crate::models::sermon::Sermon;
    use crate::storage::user_store::MockUserStore;
    use crate::models::user_record::UserRecord;

    fn catalog() -> Arc<SermonCatalog> {
        Arc::new(SermonCatalog::new(vec![
            Sermon::new("Grace Abounds", "u1"),
            Sermon::new("Walking in Faith", "u2"),
        ]))
    }

    fn profile_kim() -> UserProfile {
        UserProfile {
            name: Some("Kim".into()),
            region: Some("Seoul".into()),
            ..Default::default()
        }
    }

    fn service_with(
        store: MockUserStore,
        model: MockChatModel,
        variant: PersonaVariant,
    ) -> ConversationServiceImpl {
        ConversationServiceImpl::new(Arc::new(store), Arc::new(model), catalog(), variant)
    }

    #[tokio::test]
    async fn test_marker_is_replaced_with_sermon_url() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord::default());
        store
            .expect_save()
            .withf(|_, record| record.history.len() == 1 && record.history[0].answer.contains("u1"))
            .returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model.expect_complete().returning(|_, _| {
            Ok("위로의 말씀을 전합니다. [추천 설교: Grace Abounds]".to_string())
        });

        let service = service_with(store, model, PersonaVariant::Simple);
        let reply = service.handle("고민이 있습니다", profile_kim()).await.unwrap();

        assert!(!reply.contains("[추천 설교:"));
        assert!(reply.contains("u1"));
        assert!(reply.contains("이 고민에 도움이 될 설교입니다."));
    }

    #[tokio::test]
    async fn test_unmatched_marker_passes_through_verbatim() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord::default());
        store.expect_save().returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("끝. [추천 설교: 전혀 무관한 영어 제목 xyz]".to_string()));

        let service = service_with(store, model, PersonaVariant::Simple);
        let reply = service.handle("고민", profile_kim()).await.unwrap();

        assert!(reply.contains("[추천 설교: 전혀 무관한 영어 제목 xyz]"));
    }

    #[tokio::test]
    async fn test_two_section_variant_skips_resolution() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord::default());
        store.expect_save().returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("[일반 답변] … [추천 설교: Grace Abounds]".to_string()));

        let service = service_with(store, model, PersonaVariant::TwoSection);
        let reply = service.handle("질문", profile_kim()).await.unwrap();

        // 标记不被解析，即便目录里有完全一致的标题
        assert!(reply.contains("[추천 설교: Grace Abounds]"));
    }

    #[tokio::test]
    async fn test_missing_name_falls_back_to_anonymous_key() {
        let mut store = MockUserStore::new();
        store
            .expect_load()
            .withf(|user_id| user_id == "익명")
            .returning(|_| UserRecord::default());
        store
            .expect_save()
            .withf(|user_id, _| user_id == "익명")
            .returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("답변".to_string()));

        let service = service_with(store, model, PersonaVariant::Simple);
        service.handle("질문", UserProfile::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_replaces_stored_profile_wholesale() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord {
            profile: UserProfile {
                name: Some("Kim".into()),
                region: Some("Busan".into()),
                job: Some("교사".into()),
                ..Default::default()
            },
            history: vec![],
        });
        // 旧档案的 job 不残留：整体替换而非深合并
        store
            .expect_save()
            .withf(|_, record| {
                record.profile.region.as_deref() == Some("Seoul")
                    && record.profile.job.is_none()
            })
            .returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Ok("답변".to_string()));

        let service = service_with(store, model, PersonaVariant::Simple);
        service.handle("질문", profile_kim()).await.unwrap();
    }

    #[tokio::test]
    async fn test_model_failure_saves_nothing() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord::default());
        store.expect_save().times(0);

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_, _| Err(AppError::Upstream("boom".into())));

        let service = service_with(store, model, PersonaVariant::Simple);
        assert!(service.handle("질문", profile_kim()).await.is_err());
    }

    #[tokio::test]
    async fn test_system_prompt_reaches_model() {
        let mut store = MockUserStore::new();
        store.expect_load().returning(|_| UserRecord::default());
        store.expect_save().returning(|_, _| Ok(()));

        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|system, user| {
                system.contains("Kim") && system.contains("Seoul") && user == "질문"
            })
            .returning(|_, _| Ok("답변".to_string()));

        let service = service_with(store, model, PersonaVariant::Simple);
        service.handle("질문", profile_kim()).await.unwrap();
    }
}
