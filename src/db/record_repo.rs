use rusqlite::{params, Connection};

use crate::error::BookResult;
use crate::model::{Name, Record};

pub fn insert(conn: &Connection, position: usize, record: &Record) -> BookResult<()> {
    let name = record.name().as_str();
    conn.execute(
        "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3)",
        params![name, position as i64, record.birthday().map(|b| b.to_string())],
    )?;

    for (i, phone) in record.phones().iter().enumerate() {
        conn.execute(
            "INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)",
            params![name, i as i64, phone.as_str()],
        )?;
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute("DELETE FROM phones", [])?;
    conn.execute("DELETE FROM contacts", [])?;
    Ok(())
}

/// All stored records in their saved order. Every stored field is
/// re-validated on the way out.
pub fn find_all(conn: &Connection) -> BookResult<Vec<Record>> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM contacts ORDER BY position")?;

    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;
            Ok((name, birthday))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(name, birthday)| -> BookResult<Record> {
            let mut record = Record::with_name(Name::new(&name)?);
            for number in find_phones(conn, &name)? {
                record.add_phone(&number)?;
            }
            if let Some(bd) = birthday {
                record.set_birthday(&bd)?;
            }
            Ok(record)
        })
        .collect()
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn find_phones(conn: &Connection, contact_name: &str) -> BookResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position",
    )?;

    let numbers = stmt
        .query_map(params![contact_name], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(numbers)
}
