//! Set handles: plain named sets and composed query sets.

use crate::client::Client;
use crate::event::Event;
use crate::membership;
use crate::page::{EventsPage, SetPage};
use crate::query::QuerySet;
use crate::service::{PageOptions, ResourceService};
use crate::Result;

/// A named or computed collection of resource refs in the remote store.
///
/// The three variants are dispatched by explicit match wherever their
/// behavior differs: a plain set is addressed directly by its ref, a
/// composed set goes through the shared query endpoint, and an `each` set
/// additionally serializes its event history specially.
#[derive(Debug, Clone)]
pub enum Set {
    /// A plain named set, addressed directly by its ref.
    Plain(String),
    /// A composed query expression.
    Query(QuerySet),
    /// An `each` expression (per-member mapping).
    Each(QuerySet),
}

impl Set {
    /// A plain set wrapping a known ref.
    pub fn plain(ref_path: impl Into<String>) -> Self {
        Set::Plain(ref_path.into())
    }

    /// The ref string locating this set.
    ///
    /// For a composed set this is the self-describing `query?q=<expr>`
    /// locator, used for identity and debugging only; the expression itself
    /// travels as the `q` parameter, never inside the path.
    pub fn ref_str(&self) -> Result<String> {
        match self {
            Set::Plain(r) => Ok(r.clone()),
            Set::Query(q) | Set::Each(q) => Ok(format!("query?q={}", q.expr()?)),
        }
    }

    /// The underlying query expression, if this set is composed.
    pub fn as_query(&self) -> Option<&QuerySet> {
        match self {
            Set::Plain(_) => None,
            Set::Query(q) | Set::Each(q) => Some(q),
        }
    }

    /// Fetch one page of member refs.
    ///
    /// A plain set is fetched from its own ref; a composed set is fetched
    /// from the query endpoint with `q` set to its expression string.
    pub fn page<S: ResourceService>(
        &self,
        client: &Client<S>,
        options: &PageOptions,
    ) -> Result<SetPage> {
        let body = match self {
            Set::Plain(r) => client.get(r, &[], options)?,
            Set::Query(q) | Set::Each(q) => {
                let params = [("q".to_string(), q.expr()?.to_string())];
                client.get(&client.config().query_path, &params, options)?
            }
        };
        SetPage::decode(&body)
    }

    /// Fetch one page of membership change events.
    ///
    /// A plain set's history lives at `<ref>/events`. A composed expression
    /// is wrapped whole in `events(...)`. An `each` expression wraps only
    /// its first operand, `each(events(first),rest)`: only the mapped-over
    /// membership stream has an event history.
    pub fn events<S: ResourceService>(
        &self,
        client: &Client<S>,
        options: &PageOptions,
    ) -> Result<EventsPage> {
        let body = match self {
            Set::Plain(r) => client.get(&format!("{}/events", r), &[], options)?,
            Set::Query(q) => {
                let params = [("q".to_string(), q.events_expr()?)];
                client.get(&client.config().query_path, &params, options)?
            }
            Set::Each(q) => {
                let params = [("q".to_string(), q.each_events_expr()?)];
                client.get(&client.config().query_path, &params, options)?
            }
        };
        EventsPage::decode(&body)
    }

    /// Add a resource to this set (PUT `<set>/<resource>`).
    pub fn add<S, R>(&self, client: &Client<S>, resource: &R) -> Result<()>
    where
        S: ResourceService,
        R: RefPath + ?Sized,
    {
        membership::add(client, self, resource)
    }

    /// Remove a resource from this set (DELETE `<set>/<resource>`).
    pub fn remove<S, R>(&self, client: &Client<S>, resource: &R) -> Result<()>
    where
        S: ResourceService,
        R: RefPath + ?Sized,
    {
        membership::remove(client, self, resource)
    }
}

/// A value that resolves to a ref path in the remote store.
///
/// Sets resolve to their own ref, events to their composite ref; plain
/// strings are used as-is.
pub trait RefPath {
    /// The ref string used when this value appears in a request path.
    fn ref_path(&self) -> Result<String>;
}

impl RefPath for Set {
    fn ref_path(&self) -> Result<String> {
        self.ref_str()
    }
}

impl RefPath for Event {
    fn ref_path(&self) -> Result<String> {
        Ok(self.ref_str())
    }
}

impl RefPath for str {
    fn ref_path(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl RefPath for String {
    fn ref_path(&self) -> Result<String> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::query::{each, match_, union, Operand};
    use crate::{Error, Result};
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// One recorded request: method, path, and query parameters.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Request {
        method: &'static str,
        path: String,
        params: Vec<(String, String)>,
    }

    /// Service that records every request and replays a canned body.
    struct RecordingService {
        requests: RefCell<Vec<Request>>,
        body: Value,
    }

    impl RecordingService {
        fn returning(body: Value) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                body,
            }
        }

        fn record(&self, method: &'static str, path: &str, params: &[(String, String)]) {
            self.requests.borrow_mut().push(Request {
                method,
                path: path.to_string(),
                params: params.to_vec(),
            });
        }
    }

    impl ResourceService for RecordingService {
        fn get(&self, path: &str, params: &[(String, String)], _page: &PageOptions) -> Result<Value> {
            self.record("GET", path, params);
            Ok(self.body.clone())
        }

        fn put(&self, path: &str) -> Result<()> {
            self.record("PUT", path, &[]);
            Ok(())
        }

        fn delete(&self, path: &str) -> Result<()> {
            self.record("DELETE", path, &[]);
            Ok(())
        }
    }

    fn client_returning(body: Value) -> Client<RecordingService> {
        Client::new(RecordingService::returning(body))
    }

    fn only_request(client: &Client<RecordingService>) -> Request {
        let requests = client.service().requests.borrow();
        assert_eq!(requests.len(), 1);
        requests[0].clone()
    }

    fn q_param(expr: &str) -> Vec<(String, String)> {
        vec![("q".to_string(), expr.to_string())]
    }

    // ===== Request shape tests =====

    #[test]
    fn test_plain_page_hits_own_ref() {
        let client = client_returning(json!({ "resources": ["a"] }));
        let set = Set::plain("users/1/sets/follows");

        let page = set.page(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "users/1/sets/follows");
        assert!(request.params.is_empty());
        assert_eq!(page.refs(), ["a"]);
    }

    #[test]
    fn test_plain_events_hits_events_path() {
        let client = client_returning(json!({ "events": [] }));
        let set = Set::plain("users/1/sets/follows");

        set.events(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(request.path, "users/1/sets/follows/events");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_query_page_hits_query_endpoint() {
        let client = client_returning(json!({ "resources": [] }));
        let set = union(["a", "b"]);

        set.page(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(request.path, "query");
        assert_eq!(request.params, q_param("union(a,b)"));
    }

    #[test]
    fn test_query_events_wraps_whole_expression() {
        let client = client_returning(json!({ "events": [] }));
        let set = match_(["x", "y"]);

        set.events(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(request.path, "query");
        assert_eq!(request.params, q_param("events(match(x,y))"));
    }

    #[test]
    fn test_each_events_wraps_first_operand_only() {
        let client = client_returning(json!({ "events": [] }));
        let set = each([
            Operand::from(match_(["classes/posts", "hot"])),
            Operand::from("indexes/score"),
        ]);

        set.events(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(
            request.params,
            q_param("each(events(match(classes/posts,hot)),indexes/score)")
        );
    }

    #[test]
    fn test_configured_query_path_is_used() {
        let service = RecordingService::returning(json!({ "resources": [] }));
        let config = Config::default().with_query_path("v2/query");
        let client = Client::with_config(service, config);

        union(["a"]).page(&client, &PageOptions::new()).unwrap();

        let request = only_request(&client);
        assert_eq!(request.path, "v2/query");
    }

    // ===== Ref and decode tests =====

    #[test]
    fn test_ref_str_plain() {
        let set = Set::plain("classes/posts");
        assert_eq!(set.ref_str().unwrap(), "classes/posts");
    }

    #[test]
    fn test_ref_str_query_locator() {
        let set = union(["a", "b"]);
        assert_eq!(set.ref_str().unwrap(), "query?q=union(a,b)");
    }

    #[test]
    fn test_page_decode_error_propagates() {
        let client = client_returning(json!({ "unexpected": [] }));
        let set = Set::plain("classes/posts");

        let result = set.page(&client, &PageOptions::new());
        assert!(matches!(result, Err(Error::MissingField("resources"))));
    }

    #[test]
    fn test_malformed_operand_fails_before_transport() {
        let client = client_returning(json!({ "resources": [] }));
        let set = union([Operand::Literal(json!({ "not": "text" }))]);

        let result = set.page(&client, &PageOptions::new());

        assert!(matches!(result, Err(Error::MalformedOperand(_))));
        assert!(client.service().requests.borrow().is_empty());
    }

    // ===== Membership method tests =====

    #[test]
    fn test_add_puts_member_path() {
        let client = client_returning(json!({}));
        let set = Set::plain("users/1/sets/follows");

        set.add(&client, "users/2").unwrap();

        let request = only_request(&client);
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "users/1/sets/follows/users/2");
    }

    #[test]
    fn test_remove_deletes_member_path() {
        let client = client_returning(json!({}));
        let set = Set::plain("users/1/sets/follows");

        set.remove(&client, "users/2").unwrap();

        let request = only_request(&client);
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "users/1/sets/follows/users/2");
    }

    #[test]
    fn test_ref_path_resolution() {
        assert_eq!("users/2".ref_path().unwrap(), "users/2");
        assert_eq!(
            Set::plain("classes/posts").ref_path().unwrap(),
            "classes/posts"
        );
        assert_eq!(
            Event::new("r", "create", 5).ref_path().unwrap(),
            "r/events/5/create"
        );
    }
}
