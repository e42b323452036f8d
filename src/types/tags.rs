//! Catalogs of well-known tag names.
//!
//! These are conventions, not an enforced closed set: the dispatcher accepts
//! any string, and adapters are expected to forward unknown tags untouched.
//! Typed payload shapes for the event catalog live in
//! [`events`](crate::types::events).

/// Known `log` tags.
pub mod log {
    pub const APP_START: &str = "app_start";
    pub const APP_BACKGROUND: &str = "app_background";
    pub const APP_FOREGROUND: &str = "app_foreground";
    pub const APP_CRASH: &str = "app_crash";
    pub const USER_LOGIN: &str = "user_login";
    pub const USER_LOGOUT: &str = "user_logout";
    pub const VIEW_ITEM: &str = "view_item";
    pub const ADD_TO_CART: &str = "add_to_cart";
    pub const REMOVE_FROM_CART: &str = "remove_from_cart";
    pub const BEGIN_CHECKOUT: &str = "begin_checkout";
    pub const PURCHASE: &str = "purchase";
}

/// Known `event` tags. See [`events`](crate::types::events) for the payload
/// shape each tag expects.
pub mod event {
    pub const APP_OPEN: &str = "app-open";
    pub const USER_LOGIN: &str = "user-login";
    pub const USER_REGISTER: &str = "user-register";
    pub const ADD_TO_CART: &str = "add-to-cart";
    pub const REMOVE_FROM_CART: &str = "remove-from-cart";
    pub const BEGIN_CHECKOUT: &str = "begin-checkout";
    pub const PURCHASE_COMPLETE: &str = "purchase-complete";
}

/// Known `network` tags, one per transport and outcome.
pub mod network {
    pub const GRAPHQL_QUERY_ERROR: &str = "GraphqlQuery_error_graphql";
    pub const GRAPHQL_QUERY_INFO: &str = "GraphqlQuery_info_graphql";
    pub const GRAPHQL_QUERY_REQUEST: &str = "GraphqlQuery_request_graphql";
    pub const REST_API_ERROR: &str = "RestApi_error";
    pub const REST_API_INFO: &str = "RestApi_info";
    pub const REST_API_REQUEST: &str = "RestApi_request";
    pub const WEBSOCKET_ERROR: &str = "WebSocket_error";
    pub const WEBSOCKET_INFO: &str = "WebSocket_info";
    pub const WEBSOCKET_REQUEST: &str = "WebSocket_request";
}
