use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, Context, Result};
use hocon::{Hocon, HoconLoader};

/// Reads options from a HOCON file. Keys are first looked up in the environment, then in the
/// provided scope of the file, then at the top level of the file.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(anyhow!("The config file {:?} was not found", path));
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        Ok(Self::from_hocon(hocon, scope))
    }

    pub fn from_contents(contents: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(contents)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::from_hocon(hocon, scope))
    }

    fn from_hocon(hocon: Hocon, scope: String) -> Self {
        let env = std::env::vars().collect::<HashMap<_, _>>();

        Self { hocon, env, scope }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<i64>().ok(),
            _ => None,
        }
    }

    /// Negative integers do not map to a usize and yield None.
    pub fn as_usize(&self) -> Option<usize> {
        self.as_i64().and_then(|val| usize::try_from(val).ok())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_i64().and_then(|val| u64::try_from(val).ok())
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f32),
            Value::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONF: &str = r#"
        max_seconds = 2.5
        play {
            max_iterations = 500
            max_seconds = -1
            name = "uct"
        }
    "#;

    #[test]
    fn test_scope_takes_precedence() {
        let config = ConfigLoader::from_contents(CONF, "play".to_string()).unwrap();

        assert_eq!(config.get("max_seconds").and_then(|v| v.as_i64()), Some(-1));
        assert_eq!(
            config.get("max_iterations").and_then(|v| v.as_usize()),
            Some(500)
        );
    }

    #[test]
    fn test_falls_back_to_top_level() {
        let config = ConfigLoader::from_contents(CONF, "missing".to_string()).unwrap();

        assert_eq!(config.get("max_seconds").and_then(|v| v.as_f32()), Some(2.5));
        assert_eq!(config.get("max_iterations"), None);
    }

    #[test]
    fn test_negative_integer_is_not_a_usize() {
        assert_eq!(Value::Integer(-1).as_usize(), None);
        assert_eq!(Value::Integer(-1).as_f32(), Some(-1.0));
        assert_eq!(Value::String("12".to_string()).as_usize(), Some(12));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::new(dir.path().join("nope.conf"), "play".to_string());

        assert!(result.is_err());
    }
}
