use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

// 開発環境・本番環境のどちらで起動しているかを ENV から判定する
// ENV が未設定または不明な値の場合はビルドプロファイルで決める
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => parse_environment(&v).unwrap_or(default_env),
    }
}

fn parse_environment(v: &str) -> Option<Environment> {
    match v.to_ascii_lowercase().as_str() {
        "development" | "dev" => Some(Environment::Development),
        "production" | "prod" => Some(Environment::Production),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!(
            parse_environment("Production"),
            Some(Environment::Production)
        );
        assert_eq!(parse_environment("dev"), Some(Environment::Development));
        assert_eq!(parse_environment("staging"), None);
    }
}
