//! CloudFormation resource handlers for `OpsWorksCM::Server`
//!
//! Each invocation is one step of a long-running operation. A handler does
//! at most one round of remote calls, then returns a [`ProgressEvent`]:
//!
//! - `IN_PROGRESS` with a [`CallbackContext`] and a delay, when CloudFormation
//!   should invoke it again
//! - `SUCCESS` with the resulting model
//! - `FAILED` with a [`HandlerErrorCode`] and a message
//!
//! The handler never sleeps or keeps state between invocations; the callback
//! context is the only progress record.
//!
//! # Operations
//!
//! | Action | Phases |
//! |--------|--------|
//! | CREATE | CreateServer, then DescribeServers until HEALTHY |
//! | DELETE | DeleteServer, then DescribeServers until the server is gone |
//! | UPDATE | Untag/Tag, then UpdateServer, then one DescribeServers |
//! | READ   | DescribeServers |
//! | LIST   | DescribeServers, ListTagsForResource per server |
//!
//! # Example
//!
//! ```ignore
//! use opsworkscm_server::{HandlerInvocation, invoke};
//!
//! let invocation = HandlerInvocation::from_json(&input)?;
//! let event = invoke(&client, invocation).await;
//! println!("{}", serde_json::to_string(&event)?);
//! ```

pub mod callback;
pub mod context;
pub mod error;
pub mod handlers;
pub mod identifier;
pub mod model;
pub mod progress;
pub mod request;
pub mod translator;

// Re-exports
pub use callback::CallbackContext;
pub use context::InvocationContext;
pub use error::{InvocationError, Result, classify};
pub use identifier::{MAX_SERVER_NAME_LENGTH, derive_server_name, generate_server_name};
pub use model::{IDENTIFIER_KEY_SERVER_NAME, ResourceModel, TYPE_NAME};
pub use progress::{
    CALLBACK_DELAY_SECONDS, HandlerErrorCode, NO_CALLBACK_DELAY, OperationStatus, ProgressEvent,
};
pub use request::{Action, HandlerInvocation, ResourceHandlerRequest, invoke};
