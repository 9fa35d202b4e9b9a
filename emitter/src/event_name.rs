//! 事件名（EventName）
//!
//! 以值相等为准的事件键，构造时校验非空，保证注册表中不会出现空键。
//!
use crate::error::{EmitterError, EmitterResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// 非空事件名
///
/// # 示例
///
/// ```
/// use emitter::EventName;
///
/// let name = EventName::new("order.created").unwrap();
/// assert_eq!(name.as_str(), "order.created");
///
/// assert!(EventName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    /// 校验并创建事件名，空字符串返回 `InvalidInput`
    pub fn new(name: impl Into<String>) -> EmitterResult<Self> {
        let name = name.into();
        Self::ensure_valid(&name)?;
        Ok(Self(name))
    }

    /// 仅校验，不分配
    pub(crate) fn ensure_valid(name: &str) -> EmitterResult<()> {
        if name.is_empty() {
            return Err(EmitterError::invalid_input("event name must not be empty"));
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EventName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EventName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for EventName {
    type Error = EmitterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EventName {
    type Error = EmitterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EventName {
    type Err = EmitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<EventName> for String {
    fn from(name: EventName) -> Self {
        name.0
    }
}
