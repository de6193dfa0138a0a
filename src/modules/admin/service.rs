use std::str::FromStr;

use tracing::{info, instrument};
use userhub_core::{AppError, PaginationMeta, PaginationParams};
use userhub_db::UserStore;
use userhub_models::{Role, User, UserDetails, UserId, UserStatus, UsersPage};
use userhub_observability::track_status_change;

use crate::modules::users::service::USER_NOT_FOUND;

pub const ACTION_NOT_ALLOWED: &str = "Action not allowed";

pub struct AdminService;

impl AdminService {
    /// One page of all accounts, newest first.
    #[instrument(skip(store))]
    pub async fn list_users(
        store: &dyn UserStore,
        params: PaginationParams,
    ) -> Result<UsersPage, AppError> {
        let page = params.page();
        let limit = params.limit();

        let total_users = store.count().await?;
        let users = store.list(limit, params.offset()).await?;

        Ok(UsersPage {
            users: users.into_iter().map(UserDetails::from).collect(),
            pagination: PaginationMeta::new(page, limit, total_users),
        })
    }

    /// Sets `status` on a non-admin account other than the actor's own.
    ///
    /// A malformed id cannot name an account and is reported as not found.
    /// Self-targeting and admin targets share one message. Repeating the
    /// current status succeeds.
    #[instrument(skip(store))]
    pub async fn set_status(
        store: &dyn UserStore,
        actor_id: UserId,
        target_id: &str,
        status: UserStatus,
    ) -> Result<User, AppError> {
        let target_id =
            UserId::from_str(target_id).map_err(|_| AppError::not_found(USER_NOT_FOUND))?;

        let target = store
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        if target.role == Role::Admin || target.id == actor_id {
            return Err(AppError::forbidden(ACTION_NOT_ALLOWED));
        }

        let user = store
            .set_status(target_id, status)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        let action = match status {
            UserStatus::Active => "activate",
            UserStatus::Inactive => "deactivate",
        };
        track_status_change(action);
        info!(%actor_id, %target_id, %status, "User status changed");

        Ok(user)
    }
}
