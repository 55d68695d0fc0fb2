use crate::models::book_instance::Status;
use crate::models::{author, book, book_instance, genre};
use chrono::NaiveDate;
use sea_orm::*;

/// Populate an empty catalog with sample authors, genres, books and copies.
/// Does nothing when any author already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if author::Entity::find().count(db).await? > 0 {
        tracing::info!("Catalog already has data, skipping demo seed");
        return Ok(());
    }

    // 1. Authors
    let authors = [
        ("Patrick", "Rothfuss", Some((1973, 6, 6)), None),
        ("Ben", "Bova", Some((1932, 11, 8)), None),
        ("Isaac", "Asimov", Some((1920, 1, 2)), Some((1992, 4, 6))),
        ("Bob", "Billings", None, None),
        ("Jim", "Jones", Some((1971, 12, 16)), None),
    ];

    let mut author_ids = Vec::with_capacity(authors.len());
    for (first_name, family_name, born, died) in authors {
        let model = author::ActiveModel {
            first_name: Set(first_name.to_owned()),
            family_name: Set(family_name.to_owned()),
            date_of_birth: Set(born.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))),
            date_of_death: Set(died.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))),
            image_path: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;
        author_ids.push(model.id);
    }

    // 2. Genres
    let mut genre_ids = Vec::new();
    for name in ["Fantasy", "Science Fiction", "French Poetry"] {
        let model = genre::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        genre_ids.push(model.id);
    }

    // 3. Books (author index, genre index)
    let books = [
        (
            "The Name of the Wind (The Kingkiller Chronicle, #1)",
            "I have stolen princesses back from sleeping barrow kings. I burned down the town of Trebon. I have spent the night with Felurian and left with both my sanity and my life.",
            "9781473211896",
            0,
            0,
        ),
        (
            "The Wise Man's Fear (The Kingkiller Chronicle, #2)",
            "Picking up the tale of Kvothe Kingkiller once again, we follow him into exile, into political intrigue, courtship, adventure, love and magic.",
            "9788401352836",
            0,
            0,
        ),
        (
            "The Slow Regard of Silent Things (Kingkiller Chronicle)",
            "Deep below the University, there is a dark place. Few people know of it: a broken web of ancient passageways and abandoned rooms.",
            "9780756411336",
            0,
            0,
        ),
        (
            "Apes and Angels",
            "Humankind headed out to the stars not for conquest, nor exploration, nor even for curiosity. Humans went to the stars in a desperate crusade to save intelligent life wherever they found it.",
            "9780765379528",
            1,
            1,
        ),
        (
            "Death Wave",
            "In Ben Bova's previous novel New Earth, Jordan Kell led the first human mission beyond the solar system.",
            "9780765379504",
            1,
            1,
        ),
        ("Test Book 1", "Summary of test book 1", "ISBN111111", 3, 0),
        ("Test Book 2", "Summary of test book 2", "ISBN222222", 3, 2),
    ];

    let mut book_ids = Vec::with_capacity(books.len());
    for (title, summary, isbn, author_idx, genre_idx) in books {
        let model = book::ActiveModel {
            title: Set(title.to_owned()),
            summary: Set(summary.to_owned()),
            isbn: Set(isbn.to_owned()),
            author_id: Set(author_ids[author_idx]),
            genre_id: Set(genre_ids[genre_idx]),
            ..Default::default()
        }
        .insert(db)
        .await?;
        book_ids.push(model.id);
    }

    // 4. Copies (book index)
    let instances = [
        (0, "London Gollancz, 2014.", Status::Available, None),
        (1, " Gollancz, 2011.", Status::Loaned, Some((2024, 10, 6))),
        (2, " Gollancz, 2015.", Status::Available, None),
        (3, "New York Tom Doherty Associates, 2016.", Status::Available, None),
        (3, "New York Tom Doherty Associates, 2016.", Status::Available, None),
        (3, "New York Tom Doherty Associates, 2016.", Status::Available, None),
        (4, "New York, NY Tom Doherty Associates, LLC, 2015.", Status::Available, None),
        (4, "New York, NY Tom Doherty Associates, LLC, 2015.", Status::Maintenance, None),
        (4, "New York, NY Tom Doherty Associates, LLC, 2015.", Status::Loaned, None),
        (0, "Imprint XXX2", Status::Available, None),
        (1, "Imprint XXX3", Status::Available, None),
    ];

    for (book_idx, imprint, status, due_back) in instances {
        book_instance::ActiveModel {
            book_id: Set(book_ids[book_idx]),
            imprint: Set(imprint.trim().to_owned()),
            status: Set(status),
            due_back: Set(due_back.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!(
        authors = author_ids.len(),
        books = book_ids.len(),
        "Demo catalog seeded"
    );
    Ok(())
}
