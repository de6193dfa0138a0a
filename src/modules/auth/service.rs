use chrono::Utc;
use tracing::{info, instrument};
use userhub_auth::TokenCodec;
use userhub_core::{AppError, PasswordHasher};
use userhub_db::{EMAIL_TAKEN, UserStore};
use userhub_models::{
    LoginRequest, LoginResponse, NewUser, Role, SignupRequest, User, UserId, UserResponse,
    UserStatus,
};
use userhub_observability::{
    track_jwt_issued, track_login_failure, track_login_success, track_user_signed_up,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const USER_INACTIVE: &str = "User is inactive";

pub struct AuthService;

impl AuthService {
    /// Creates an `ACTIVE` `USER` account. No token is issued.
    #[instrument(skip(store, hasher, dto), fields(email = %dto.email))]
    pub async fn signup(
        store: &dyn UserStore,
        hasher: &PasswordHasher,
        dto: SignupRequest,
    ) -> Result<User, AppError> {
        if store.email_taken(&dto.email, None).await? {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let password_hash = hasher.hash(&dto.password).await?;

        let user = store
            .create(NewUser {
                full_name: dto.full_name,
                email: dto.email,
                password_hash,
                role: Role::User,
                status: UserStatus::Active,
            })
            .await?;

        track_user_signed_up();
        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password produce the same error. The inactive
    /// check only happens once the password has verified.
    #[instrument(skip(store, hasher, tokens, dto), fields(email = %dto.email))]
    pub async fn login(
        store: &dyn UserStore,
        hasher: &PasswordHasher,
        tokens: &TokenCodec,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let Some(mut user) = store.find_by_email(&dto.email).await? else {
            hasher.verify_dummy(&dto.password).await;
            track_login_failure("unknown_email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !hasher.verify(&dto.password, &user.password_hash).await? {
            track_login_failure("wrong_password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !user.is_active() {
            track_login_failure("inactive");
            return Err(AppError::forbidden(USER_INACTIVE));
        }

        let token = tokens.issue(user.id, user.role)?;
        track_jwt_issued();

        let now = Utc::now();
        store.record_login(user.id, now).await?;
        user.last_login = Some(now);

        track_login_success(user.role.as_str());
        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Resolves the token's subject to its current record.
    #[instrument(skip(store))]
    pub async fn current_user(
        store: &dyn UserStore,
        user_id: UserId,
    ) -> Result<UserResponse, AppError> {
        store
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::unauthorized(crate::middleware::auth::UNAUTHORIZED))
    }
}
