use tracing::{info, instrument};
use userhub_core::{AppError, PasswordHasher};
use userhub_db::{EMAIL_TAKEN, UserStore};
use userhub_models::{ChangePasswordRequest, UpdateProfileRequest, UserDetails, UserId};

pub const USER_NOT_FOUND: &str = "User not found";
pub const WRONG_CURRENT_PASSWORD: &str = "Current password is incorrect";

pub struct UserService;

impl UserService {
    #[instrument(skip(store))]
    pub async fn get_profile(store: &dyn UserStore, user_id: UserId) -> Result<UserDetails, AppError> {
        store
            .find_by_id(user_id)
            .await?
            .map(UserDetails::from)
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// Applies a partial update. Keeping one's own email is not a conflict.
    #[instrument(skip(store))]
    pub async fn update_profile(
        store: &dyn UserStore,
        user_id: UserId,
        dto: UpdateProfileRequest,
    ) -> Result<UserDetails, AppError> {
        if let Some(email) = &dto.email {
            if store.email_taken(email, Some(user_id)).await? {
                return Err(AppError::conflict(EMAIL_TAKEN));
            }
        }

        let user = store
            .update_profile(user_id, dto.full_name, dto.email)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        info!(%user_id, "Profile updated");
        Ok(UserDetails::from(user))
    }

    /// Replaces the password hash after the current password verifies. On a
    /// mismatch the stored hash is left untouched.
    #[instrument(skip(store, hasher, dto))]
    pub async fn change_password(
        store: &dyn UserStore,
        hasher: &PasswordHasher,
        user_id: UserId,
        dto: ChangePasswordRequest,
    ) -> Result<(), AppError> {
        let user = store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        if !hasher.verify(&dto.current_password, &user.password_hash).await? {
            return Err(AppError::unauthorized(WRONG_CURRENT_PASSWORD));
        }

        let password_hash = hasher.hash(&dto.new_password).await?;

        if !store.update_password(user_id, &password_hash).await? {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        info!(%user_id, "Password changed");
        Ok(())
    }
}
