// Integration tests for the public request options API.
//
// These exercise the crate the way an HTTP client would: build options,
// persist them, restore them, and turn them into a request URL.

mod helpers;
mod test_persistence;
mod test_request_url;
mod test_voices;
