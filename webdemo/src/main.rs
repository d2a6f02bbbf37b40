use leptos::prelude::*;
use webdemo::App;

fn main() {
    webdemo::init_logging(log::LevelFilter::Info);
    mount_to_body(App);
}
