//! User model -> entity mapper

use stats_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            nickname: model.nickname,
            app_id: model.app_id,
            app_bundle: model.app_bundle,
            avatar: model.avatar,
            error: model.error,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
