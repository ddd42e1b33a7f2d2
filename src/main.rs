fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use limen_web::app::App;
        use limen_web::app_lib::build_info;

        leptos::logging::log!(
            "limen-web {} ({})",
            env!("CARGO_PKG_VERSION"),
            build_info::git_commit_hash()
        );
        leptos::prelude::mount_to_body(App);
    }
}
