// A few rules of thumb.
// Handlers stay thin: marshal JSON in, run the db-layer call on the pool, marshal JSON out.
// All fallible paths funnel through ApiError so every error body has the same shape.
// Field presence is the type's job; range and existence checks belong to cropverse-db.

#[macro_use]
extern crate rocket;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate rocket_sync_db_pools;

pub use infras::{basics::*, database::DbConn};
use rocket::{
    fairing::AdHoc,
    figment::{
        providers::{Format, Toml},
        Figment,
    },
    shield::Shield,
    Build, Rocket,
};
use std::path::PathBuf;
use structopt::StructOpt;

mod infras;
mod pages;
mod services;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cropverse-bin",
    about = "The web server for CropVerse, an agricultural marketplace"
)]
struct CropVerseOpts {
    /// Path to the TOML configuration file.
    #[structopt(short, long, parse(from_os_str))]
    config: PathBuf,
}

#[launch]
fn rocket() -> Rocket<Build> {
    use cropverse_db::{crops::CropsBuilder, farmers::FarmersBuilder};

    let args: CropVerseOpts = CropVerseOpts::from_args();

    // All run-time configuration comes from the file named on the command line;
    // rocket::custom never reads an ambient Rocket.toml.
    let figment = Figment::from(rocket::Config::default()).merge(Toml::file(args.config).nested());

    rocket::custom(figment)
        .attach(DbConn::fairing())
        .attach(Shield::new())
        .attach(Cors)
        .attach(AdHoc::config::<CropsBuilder>())
        .attach(AdHoc::config::<FarmersBuilder>())
        .attach(AdHoc::on_ignite(
            "Run database migrations",
            infras::database::run_migrations,
        ))
        .mount("/", routes![pages::basics::index, pages::basics::preflight])
        // Mount the API namespace
        .mount(
            "/api",
            routes![
                services::listings::all_listings,
                services::listings::create_listing,
                services::crops::all_crops,
                services::alerts::recent_alerts,
                services::reports::create_report,
                services::orders::purchase,
            ],
        )
        .register(
            "/",
            catchers![
                pages::basics::bad_request,
                pages::basics::not_found,
                pages::basics::unprocessable,
                pages::basics::internal_error
            ],
        )
}
