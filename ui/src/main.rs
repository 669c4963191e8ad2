#[cfg(feature = "ssr")]
mod server {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use ui::App;

    pub async fn run() {
        let conf = match get_configuration(None).await {
            Ok(conf) => conf,
            Err(err) => {
                eprintln!("failed to load leptos config: {err}");
                return;
            }
        };
        let leptos_options = conf.leptos_options;
        let addr = leptos_options.site_addr;
        let routes = generate_route_list(App);

        let app = Router::new()
            .leptos_routes(&leptos_options, routes, App)
            .with_state(leptos_options);

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(err) => {
                eprintln!("failed to bind {addr}: {err}");
                return;
            }
        };
        println!("Inventory dashboard listening on http://{}", addr);
        if let Err(err) = axum::serve(listener, app.into_make_service()).await {
            eprintln!("server error: {err}");
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    server::run().await;
}

#[cfg(not(feature = "ssr"))]
fn main() {}
