use photo_modal_ui::app::App;

fn main() {
    photo_modal_ui::init_console();
    leptos::mount::mount_to_body(App);
}
