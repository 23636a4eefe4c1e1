use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Distinguishes bearer access tokens from cookie-borne refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    #[serde(rename = "access")]
    Access,
    #[serde(rename = "refresh_token")]
    Refresh,
}

/// Identity payload of a token. Each variant gates one resource family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    User {
        user_id: i64,
        name: String,
        nationality: String,
    },
    Mathematician {
        mathematician_id: i64,
    },
    Developer {
        developer_id: i64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    #[serde(flatten)]
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token")]
    Invalid,

    #[error("wrong token type")]
    WrongType,

    #[error("token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
}

pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

pub struct JwtService {
    secret: String,
    access_token_duration: Duration,
    refresh_token_duration: Duration,
}

impl JwtService {
    pub fn new(secret: String, access_minutes: i64, refresh_days: i64) -> Self {
        Self {
            secret,
            access_token_duration: Duration::minutes(access_minutes),
            refresh_token_duration: Duration::days(refresh_days),
        }
    }

    /// Signs a claim set expiring `ttl` from now.
    pub fn issue(
        &self,
        subject: &str,
        role: Role,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let exp = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type,
            role,
        };

        encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encode)
    }

    pub fn create_access_token(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        self.issue(subject, role, TokenType::Access, self.access_token_duration)
    }

    pub fn create_refresh_token(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        self.issue(subject, role, TokenType::Refresh, self.refresh_token_duration)
    }

    pub fn create_token_pair(&self, subject: &str, role: Role) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.create_access_token(subject, role.clone())?,
            refresh_token: self.create_refresh_token(subject, role)?,
            expires_in: self.get_access_token_duration_secs(),
        })
    }

    /// Verifies signature and expiry (no leeway) and returns the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;
        if claims.token_type != TokenType::Access {
            return Err(TokenError::WrongType);
        }
        Ok(claims)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;
        if claims.token_type != TokenType::Refresh {
            return Err(TokenError::WrongType);
        }
        Ok(claims)
    }

    pub fn get_access_token_duration_secs(&self) -> i64 {
        self.access_token_duration.num_seconds()
    }
}
