use anyhow::{Context, Result};

pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    get_env_parsed(key)
}

pub fn get_env_u64(key: &str) -> Result<Option<u64>> {
    get_env_parsed(key)
}

fn get_env_parsed<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} must be a valid number, found {:?}", key, value)),
        Err(_) => Ok(None),
    }
}
