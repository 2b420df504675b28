// Portfolio site entry point, built by trunk

fn main() {
    console_error_panic_hook::set_once();
    portfolio_site::start();
}
