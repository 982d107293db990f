#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::{DefaultHeaders, Logger};
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use tracing_subscriber::EnvFilter;

    use paxora::config::ServerConfig;
    use paxora::frontend;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load().map_err(std::io::Error::other)?;
    let bind_addr = config.bind_addr;
    let site_root = config.site_root();
    let leptos_options = config.leptos_options;

    log::info!("Paxora Learning Hub listening on http://{bind_addr}");

    HttpServer::new(move || {
        let routes = generate_route_list(frontend::App);

        App::new()
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || frontend::shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // The browser build starts from `paxora::hydrate`.
}
