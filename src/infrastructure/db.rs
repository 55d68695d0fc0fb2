use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    // Every handler must see the same in-memory database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS Author (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            family_name TEXT NOT NULL,
            date_of_birth DATE,
            date_of_death DATE,
            image_path TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS Genre (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS Book (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES Author(id),
            summary TEXT NOT NULL,
            isbn TEXT NOT NULL,
            genre_id INTEGER NOT NULL REFERENCES Genre(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS BookInstance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            book_id INTEGER NOT NULL REFERENCES Book(id),
            imprint TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Maintenance'
                CHECK (status IN ('Available', 'Maintenance', 'Loaned', 'Reserved')),
            due_back DATE
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_book_author ON Book(author_id)",
        "CREATE INDEX IF NOT EXISTS idx_book_genre ON Book(genre_id)",
        "CREATE INDEX IF NOT EXISTS idx_book_instance_book ON BookInstance(book_id)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    tracing::debug!("Catalog schema ready");
    Ok(())
}
