use wasm_bindgen::prelude::*;

/// This module replaces `window.fetch` and `window.alert` with recorders so
/// page components can be driven without a live API.

#[wasm_bindgen(inline_js = r#"
export function setup_fetch_mock() {
    const state = { routes: [], calls: [], alerts: [] };
    window.__townlinkFetchMock = state;

    window.fetch = function(input, init) {
        const request = input instanceof Request ? input : new Request(input, init);
        const call = {
            method: request.method,
            url: request.url,
            adminKey: request.headers.get('x-admin-key'),
        };
        state.calls.push(call);
        console.log("[MOCK FETCH]", call.method, call.url);

        const index = state.routes.findIndex(r => r.method === call.method && call.url.endsWith(r.path));
        const route = index >= 0 ? state.routes[index] : null;
        if (route && route.once) {
            state.routes.splice(index, 1);
        }
        if (!route || route.fail) {
            return Promise.reject(new TypeError('Failed to fetch'));
        }
        const respond = () => new Response(route.body, {
            status: route.status,
            headers: { 'Content-Type': 'application/json' },
        });
        if (route.delayMs > 0) {
            return new Promise(resolve => setTimeout(() => resolve(respond()), route.delayMs));
        }
        return Promise.resolve(respond());
    };

    window.alert = function(message) {
        console.log("[MOCK ALERT]", message);
        state.alerts.push(String(message));
    };
    return true;
}

export function mock_response(method, path, status, body) {
    // newest registration wins
    window.__townlinkFetchMock.routes.unshift({ method, path, status, body, fail: false, once: false, delayMs: 0 });
}

export function mock_delayed_response_once(method, path, status, body, delay_ms) {
    window.__townlinkFetchMock.routes.unshift({ method, path, status, body, fail: false, once: true, delayMs: delay_ms });
}

export function mock_network_failure(method, path) {
    window.__townlinkFetchMock.routes.unshift({ method, path, status: 0, body: null, fail: true, once: false, delayMs: 0 });
}

export function fetch_call_count() {
    return window.__townlinkFetchMock.calls.length;
}

export function fetch_calls_to(method, path) {
    return window.__townlinkFetchMock.calls
        .filter(c => c.method === method && c.url.endsWith(path))
        .length;
}

export function last_admin_key() {
    const calls = window.__townlinkFetchMock.calls;
    return calls.length ? (calls[calls.length - 1].adminKey || "") : "";
}

export function last_alert() {
    const alerts = window.__townlinkFetchMock.alerts;
    return alerts.length ? alerts[alerts.length - 1] : "";
}
"#)]
extern "C" {
    /// Installs fresh fetch and alert mocks, dropping earlier routes and calls
    pub fn setup_fetch_mock() -> bool;

    /// Answers `method` requests whose URL ends with `path`
    pub fn mock_response(method: &str, path: &str, status: u16, body: &str);

    /// Answers the next matching request only, after `delay_ms` milliseconds
    pub fn mock_delayed_response_once(method: &str, path: &str, status: u16, body: &str, delay_ms: u32);

    /// Makes matching requests reject like a dropped connection
    pub fn mock_network_failure(method: &str, path: &str);

    pub fn fetch_call_count() -> u32;

    pub fn fetch_calls_to(method: &str, path: &str) -> u32;

    pub fn last_admin_key() -> String;

    pub fn last_alert() -> String;
}
