use super::{QaStorage, StorageError};
use crate::DbConnection;
use async_trait::async_trait;
use chrono::Utc;
use qa_types::{Answer, Question};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashMap;
use std::sync::MutexGuard;

pub struct SqliteQaStorage {
    connection: DbConnection,
}

impl SqliteQaStorage {
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    /// The guard is the request's scoped handle on the store; it is released
    /// when dropped on every return path.
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.connection
            .lock()
            .map_err(|e| StorageError::OperationFailed(format!("Lock error: {}", e)))
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        text: row.get(1)?,
        created_at: row.get(2)?,
        answers: Vec::new(),
    })
}

fn answer_from_row(row: &Row<'_>) -> rusqlite::Result<Answer> {
    Ok(Answer {
        id: row.get(0)?,
        question_id: row.get(1)?,
        user_id: row.get(2)?,
        text: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn question_exists(conn: &Connection, question_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM questions WHERE id = ?1)",
        params![question_id],
        |row| row.get(0),
    )
}

fn answer_exists(conn: &Connection, answer_id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM answers WHERE id = ?1)",
        params![answer_id],
        |row| row.get(0),
    )
}

fn find_question(conn: &Connection, question_id: i64) -> rusqlite::Result<Option<Question>> {
    conn.query_row(
        "SELECT id, text, created_at FROM questions WHERE id = ?1",
        params![question_id],
        question_from_row,
    )
    .optional()
}

fn find_answer(conn: &Connection, answer_id: i64) -> rusqlite::Result<Option<Answer>> {
    conn.query_row(
        "SELECT id, question_id, user_id, text, created_at FROM answers WHERE id = ?1",
        params![answer_id],
        answer_from_row,
    )
    .optional()
}

fn answers_for(conn: &Connection, question_id: i64) -> rusqlite::Result<Vec<Answer>> {
    conn.prepare(
        r#"
        SELECT id, question_id, user_id, text, created_at
        FROM answers
        WHERE question_id = ?1
        ORDER BY id ASC
        "#,
    )?
    .query_map(params![question_id], answer_from_row)?
    .collect()
}

#[async_trait]
impl QaStorage for SqliteQaStorage {
    async fn create_question(&self, text: &str) -> Result<Question, StorageError> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO questions (text, created_at) VALUES (?1, ?2)",
            params![text, Utc::now()],
        )?;

        let id = conn.last_insert_rowid();
        find_question(&conn, id)?.ok_or(StorageError::QuestionNotFound(id))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;

        let mut questions = conn
            .prepare("SELECT id, text, created_at FROM questions ORDER BY id ASC")?
            .query_map([], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut answers_by_question: HashMap<i64, Vec<Answer>> = HashMap::new();
        let mut stmt = conn.prepare(
            "SELECT id, question_id, user_id, text, created_at FROM answers ORDER BY id ASC",
        )?;
        for answer in stmt.query_map([], answer_from_row)? {
            let answer = answer?;
            answers_by_question
                .entry(answer.question_id)
                .or_default()
                .push(answer);
        }

        for question in &mut questions {
            if let Some(answers) = answers_by_question.remove(&question.id) {
                question.answers = answers;
            }
        }

        Ok(questions)
    }

    async fn get_question_with_answers(&self, question_id: i64) -> Result<Question, StorageError> {
        let conn = self.lock()?;

        let mut question =
            find_question(&conn, question_id)?.ok_or(StorageError::QuestionNotFound(question_id))?;
        question.answers = answers_for(&conn, question_id)?;

        Ok(question)
    }

    async fn delete_question(&self, question_id: i64) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if !question_exists(&tx, question_id)? {
            return Err(StorageError::QuestionNotFound(question_id));
        }

        // Children first; must hold even with the foreign_keys pragma off.
        tx.execute(
            "DELETE FROM answers WHERE question_id = ?1",
            params![question_id],
        )?;
        tx.execute("DELETE FROM questions WHERE id = ?1", params![question_id])?;
        tx.commit()?;

        Ok(())
    }

    async fn create_answer(
        &self,
        question_id: i64,
        text: &str,
        user_id: &str,
    ) -> Result<Answer, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if !question_exists(&tx, question_id)? {
            return Err(StorageError::QuestionMissing(question_id));
        }

        tx.execute(
            r#"
            INSERT INTO answers (question_id, user_id, text, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![question_id, user_id, text, Utc::now()],
        )?;

        let id = tx.last_insert_rowid();
        let answer = find_answer(&tx, id)?.ok_or(StorageError::AnswerNotFound(id))?;
        tx.commit()?;

        Ok(answer)
    }

    async fn get_answer(&self, answer_id: i64) -> Result<Answer, StorageError> {
        let conn = self.lock()?;
        find_answer(&conn, answer_id)?.ok_or(StorageError::AnswerNotFound(answer_id))
    }

    async fn delete_answer(&self, answer_id: i64) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        if !answer_exists(&tx, answer_id)? {
            return Err(StorageError::AnswerNotFound(answer_id));
        }

        tx.execute("DELETE FROM answers WHERE id = ?1", params![answer_id])?;
        tx.commit()?;

        Ok(())
    }
}
