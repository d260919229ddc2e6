//! Membership mutation against named sets.
//!
//! Available here as two-argument free functions, and as one-argument
//! instance methods on [`Set`](crate::Set) (the set supplies the first
//! argument). No response body is interpreted; success is the absence of a
//! transport error.

use crate::client::Client;
use crate::service::ResourceService;
use crate::set::RefPath;
use crate::Result;

/// Add `resource` to `set`: PUT `<set>/<resource>`.
pub fn add<S, A, B>(client: &Client<S>, set: &A, resource: &B) -> Result<()>
where
    S: ResourceService,
    A: RefPath + ?Sized,
    B: RefPath + ?Sized,
{
    client.put(&member_path(set, resource)?)
}

/// Remove `resource` from `set`: DELETE `<set>/<resource>`.
pub fn remove<S, A, B>(client: &Client<S>, set: &A, resource: &B) -> Result<()>
where
    S: ResourceService,
    A: RefPath + ?Sized,
    B: RefPath + ?Sized,
{
    client.delete(&member_path(set, resource)?)
}

/// The `<set>/<resource>` path a membership operation targets.
fn member_path<A, B>(set: &A, resource: &B) -> Result<String>
where
    A: RefPath + ?Sized,
    B: RefPath + ?Sized,
{
    Ok(format!("{}/{}", set.ref_path()?, resource.ref_path()?))
}
