//! Todo Frontend Entry Point

mod app;
mod components;
mod models;
mod row_state;
mod storage;
mod store;
mod todo_list;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
