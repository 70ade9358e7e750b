use cropverse_db::{crops::CropsBuilder, farmers::FarmersBuilder};
use diesel::connection::SimpleConnection;
use rocket::{Build, Rocket};

#[database("cropverse")]
pub struct DbConn(diesel::SqliteConnection);

pub async fn run_migrations(rocket: Rocket<Build>) -> Rocket<Build> {
    // This macro from `diesel_migrations` defines an `embedded_migrations`
    // module containing a function named `run`. The schema and its triggers
    // ship with the data layer crate.
    embed_migrations!("../cropverse-db/migrations");

    let conn = DbConn::get_one(&rocket).await.expect("database connection");

    let crops = rocket.state::<CropsBuilder>().cloned();
    let farmers = rocket.state::<FarmersBuilder>().cloned();

    // Initialize the database
    conn.run(|c| {
        embedded_migrations::run(c).expect("can run migrations");

        // Enforce foreign key relation
        c.batch_execute("PRAGMA foreign_keys = ON;").unwrap();

        // Seed the demo farmers and the crop catalogue. Listings hold foreign
        // keys into both tables, so the builders leave existing rows alone.
        if let Some(x) = farmers {
            x.build(c).unwrap()
        }
        if let Some(x) = crops {
            x.build(c).unwrap()
        }
    })
    .await;
    rocket
}
