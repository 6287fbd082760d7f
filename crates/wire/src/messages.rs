//! Request and reply messages exchanged with a store
//!
//! Field names and status strings are part of the wire contract:
//!
//! | Message | Fields |
//! |---------|--------|
//! | GetArgs | `key` |
//! | GetReply | `value`, `version`, `err` |
//! | PutArgs | `key`, `value`, `version` |
//! | PutReply | `err` |
//!
//! `err` is one of `"OK"`, `"ErrNoKey"`, `"ErrVersion"`.

use occlock_core::{Entry, StoreError, StoreResult, Version};
use serde::{Deserialize, Serialize};

/// Outcome code carried in every reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Success
    #[default]
    #[serde(rename = "OK")]
    Ok,
    /// The key has no entry under conditions requiring one
    ErrNoKey,
    /// The expected version did not match the current version
    ErrVersion,
}

impl Status {
    /// Status describing a store result
    pub fn of<T>(result: &StoreResult<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(StoreError::NoKey) => Status::ErrNoKey,
            Err(StoreError::Version) => Status::ErrVersion,
        }
    }

    /// Convert back into a store result
    pub fn into_result(self) -> StoreResult<()> {
        match self {
            Status::Ok => Ok(()),
            Status::ErrNoKey => Err(StoreError::NoKey),
            Status::ErrVersion => Err(StoreError::Version),
        }
    }

    /// Check for success
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Status::Ok => "OK",
            Status::ErrNoKey => "ErrNoKey",
            Status::ErrVersion => "ErrVersion",
        };
        f.write_str(code)
    }
}

/// Arguments of a get request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetArgs {
    /// Key to read
    pub key: String,
}

impl GetArgs {
    /// Create get arguments
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Reply to a get request
///
/// When `err` is [`Status::ErrNoKey`], `value` is empty and `version` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetReply {
    /// Stored value
    pub value: String,
    /// Stored version
    pub version: Version,
    /// Outcome
    pub err: Status,
}

impl GetReply {
    /// Build a reply from a store read
    pub fn from_result(result: StoreResult<Entry>) -> Self {
        match result {
            Ok(entry) => Self {
                value: entry.value,
                version: entry.version,
                err: Status::Ok,
            },
            Err(e) => Self {
                value: String::new(),
                version: Version::ZERO,
                err: Status::of::<()>(&Err(e)),
            },
        }
    }

    /// Convert into the value and version, or the store's rejection
    pub fn into_result(self) -> StoreResult<(String, Version)> {
        self.err.into_result()?;
        Ok((self.value, self.version))
    }
}

/// Arguments of a conditional put request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutArgs {
    /// Key to write
    pub key: String,
    /// New value
    pub value: String,
    /// Version the writer last observed (0 for an absent key)
    pub version: Version,
}

impl PutArgs {
    /// Create put arguments
    pub fn new(key: impl Into<String>, value: impl Into<String>, version: Version) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            version,
        }
    }
}

/// Reply to a put request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PutReply {
    /// Outcome
    pub err: Status,
}

impl PutReply {
    /// Build a reply from a store write
    pub fn from_result<T>(result: &StoreResult<T>) -> Self {
        Self {
            err: Status::of(result),
        }
    }

    /// Convert into the store's result
    pub fn into_result(self) -> StoreResult<()> {
        self.err.into_result()
    }
}

/// Envelope carrying either request over one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Read a key
    Get(GetArgs),
    /// Conditionally write a key
    Put(PutArgs),
}

impl Request {
    /// Key the request targets
    pub fn key(&self) -> &str {
        match self {
            Request::Get(args) => &args.key,
            Request::Put(args) => &args.key,
        }
    }
}

/// Envelope carrying the reply matching a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Response {
    /// Reply to [`Request::Get`]
    Get(GetReply),
    /// Reply to [`Request::Put`]
    Put(PutReply),
}

impl Response {
    /// Outcome code of the reply
    pub fn status(&self) -> Status {
        match self {
            Response::Get(reply) => reply.err,
            Response::Put(reply) => reply.err,
        }
    }
}
