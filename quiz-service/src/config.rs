use std::env::var;

use tracing::{error, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub dynamodb: aws_sdk_dynamodb::Client,
    pub s3: aws_sdk_s3::Client,
    pub env_vars: EnvVars,
}

#[derive(Debug, Clone)]
pub struct EnvVars {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub user_table_name: String,
    pub quiz_table_name: String,
    pub bucket_name: String,
    pub port: u16,
    pub request_body_size_limit: usize,
    pub request_timeout_in_ms: u64,
}

impl EnvVars {
    pub fn new() -> Self {
        let Ok(access_key_id) = var("ACCESS_KEY_ID") else {
            error!("ACCESS_KEY_ID not set");
            panic!("ACCESS_KEY_ID required");
        };
        assert!(!access_key_id.is_empty(), "ACCESS_KEY_ID must not be empty");

        let Ok(secret_access_key) = var("SECRET_ACCESS_KEY") else {
            error!("SECRET_ACCESS_KEY not set");
            panic!("SECRET_ACCESS_KEY required");
        };
        assert!(
            !secret_access_key.is_empty(),
            "SECRET_ACCESS_KEY must not be empty"
        );

        let Ok(region) = var("REGION") else {
            error!("REGION not set");
            panic!("REGION required");
        };
        assert!(!region.is_empty(), "REGION must not be empty");

        let user_table_name = name_or_default("USER_TABLE_NAME", "quiz-users");
        let quiz_table_name = name_or_default("QUIZ_TABLE_NAME", "quiz-questions");
        let bucket_name = name_or_default("S3_BUCKET_NAME", "quiz-assets");

        let port = match var("PORT") {
            Ok(port_string) => port_string.parse().expect("PORT to be parseable as u16"),
            Err(_e) => {
                let default_port = 8080;
                warn!("PORT not set. Defaulting to {default_port}");
                default_port
            }
        };

        let request_timeout_in_ms = match var("REQUEST_TIMEOUT_IN_MS") {
            Ok(s) => s
                .parse()
                .expect("REQUEST_TIMEOUT_IN_MS to be valid unsigned integer"),
            Err(_e) => {
                let default_request_timeout = 30_000;
                warn!("REQUEST_TIMEOUT_IN_MS not set. Defaulting to {default_request_timeout}");
                default_request_timeout
            }
        };

        let request_body_size_limit = match var("REQUEST_BODY_SIZE_LIMIT") {
            Ok(s) => s
                .parse()
                .expect("REQUEST_BODY_SIZE_LIMIT to be valid unsigned integer"),
            Err(_e) => {
                let base: usize = 2;
                let exp = 20;
                let default_request_body_size_limit = base.pow(exp);
                warn!(
                    "REQUEST_BODY_SIZE_LIMIT not set. Defaulting to {default_request_body_size_limit}"
                );
                default_request_body_size_limit
            }
        };

        EnvVars {
            access_key_id,
            secret_access_key,
            region,
            user_table_name,
            quiz_table_name,
            bucket_name,
            port,
            request_body_size_limit,
            request_timeout_in_ms,
        }
    }
}

fn name_or_default(key: &str, default: &str) -> String {
    match var(key) {
        Ok(s) if !s.is_empty() => s,
        _ => {
            warn!("{key} not set. Defaulting to {default}");
            default.to_string()
        }
    }
}
