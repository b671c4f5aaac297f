use crate::error::ServiceError;
use crate::middlewares::auth::{JwtClaims, JwtService};
use crate::models::user::{LoginRequest, RegisterRequest, User};
use anyhow::{anyhow, Context};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Database;
use prepmaster_catalog::AuthResponse;
use validator::Validate;

/// Mongo server error code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct AuthService {
    mongo: Database,
    jwt_service: JwtService,
    token_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(mongo: Database, jwt_service: JwtService, token_ttl_seconds: i64) -> Self {
        Self {
            mongo,
            jwt_service,
            token_ttl_seconds,
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        hash(password, DEFAULT_COST)
            .context("Failed to hash password")
            .map_err(ServiceError::Internal)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, ServiceError> {
        verify(password, hash)
            .context("Failed to verify password")
            .map_err(ServiceError::Internal)
    }

    /// Register a new user. The unique index on `email` is the arbiter for
    /// duplicates; concurrent registrations racing past the field checks
    /// still resolve to exactly one stored record.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, ServiceError> {
        req.validate()
            .map_err(|e| ServiceError::Validation(format!("Missing fields: {}", e)))?;

        let users = self.mongo.collection::<User>("users");

        let password_hash = self.hash_password(&req.password)?;

        let now = Utc::now();
        let user = User {
            id: None, // MongoDB will generate
            email: req.email,
            password_hash,
            name: req.name,
            solved_problems: Vec::new(),
            mcq_stats: Default::default(),
            points: 0,
            created_at: now,
            updated_at: now,
        };

        let insert_result = match users.insert_one(&user).await {
            Ok(result) => result,
            Err(e) if is_duplicate_key(&e) => {
                tracing::warn!(email = %user.email, "Registration rejected: duplicate email");
                return Err(ServiceError::Conflict("Email already exists".to_string()));
            }
            Err(e) => {
                return Err(ServiceError::Internal(
                    anyhow::Error::new(e).context("Failed to insert user"),
                ))
            }
        };

        let user_id = insert_result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ServiceError::Internal(anyhow!("Failed to get inserted user ID")))?;

        let token = self.generate_token(&user_id)?;

        let mut user_with_id = user;
        user_with_id.id = Some(user_id);

        tracing::info!(user_id = %user_id.to_hex(), "User registered");

        Ok(AuthResponse {
            token,
            user: user_with_id.into(),
        })
    }

    /// Login with email and password. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ServiceError> {
        let users = self.mongo.collection::<User>("users");

        let user = users
            .find_one(doc! { "email": &req.email })
            .await
            .context("Failed to query user")?
            .ok_or(ServiceError::Unauthorized)?;

        if !self.verify_password(&req.password, &user.password_hash)? {
            tracing::warn!(email = %req.email, "Failed login attempt: invalid password");
            return Err(ServiceError::Unauthorized);
        }

        let user_id = user
            .id
            .ok_or_else(|| ServiceError::Internal(anyhow!("User ID not found")))?;

        // A fresh token per login; prior tokens are never reused.
        let token = self.generate_token(&user_id)?;

        tracing::info!(user_id = %user_id.to_hex(), "Successful login");

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    /// Get user by ID (backs GET /api/auth/me)
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<User, ServiceError> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| ServiceError::Validation("Invalid user ID format".to_string()))?;

        let users = self.mongo.collection::<User>("users");
        users
            .find_one(doc! { "_id": object_id })
            .await
            .context("Failed to query user")?
            .ok_or(ServiceError::Unauthorized)
    }

    /// Generate a signed session token binding the user id.
    fn generate_token(&self, user_id: &ObjectId) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_ttl_seconds);

        let claims = JwtClaims {
            sub: user_id.to_hex(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        self.jwt_service
            .generate_token(claims)
            .map_err(|e| ServiceError::Internal(anyhow!("Failed to generate token: {}", e)))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    if let mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref we)) =
        *error.kind
    {
        return we.code == DUPLICATE_KEY_CODE;
    }
    false
}
