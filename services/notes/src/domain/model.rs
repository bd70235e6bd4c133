use std::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

/// An entity persisted under a store-assigned surrogate id.
///
/// Anything implementing `Model` can be served by the generic model service
/// and controller.
pub trait Model:
    Clone + Debug + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    type Id: Copy + Debug + Display + PartialEq + DeserializeOwned + Send + Sync + 'static;

    /// Short name used in logs and error context.
    const NAME: &'static str;

    /// `None` until the entity has been saved once.
    fn id(&self) -> Option<Self::Id>;

    fn set_id(&mut self, id: Self::Id);
}
