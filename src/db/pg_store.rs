// src/db/pg_store.rs

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, PgPool, Postgres,
};

use crate::{
    common::error::AppError,
    db::store::RecordStore,
    models::{Area, Category, LookupField, Product, Resource, Role, User, Warehouse},
};

type PgQueryAs<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// Recursos que sabem se mapear para colunas do Postgres.
pub trait PgRecord: Resource + for<'r> FromRow<'r, PgRow> {
    /// Colunas graváveis, na mesma ordem usada por `bind_input`.
    const COLUMNS: &'static [&'static str];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self>;
}

// O store genérico: um por tabela, todos compartilhando a mesma pool.
pub struct PgStore<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> PgStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, _record: PhantomData }
    }
}

#[async_trait]
impl<R: PgRecord> RecordStore<R> for PgStore<R> {
    async fn find_all_active(&self) -> Result<Vec<R>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE status = TRUE ORDER BY id ASC", R::TABLE);
        let records = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        Ok(records)
    }

    async fn find_active_by_id(&self, id: i32) -> Result<Option<R>, AppError> {
        let sql = format!("SELECT * FROM {} WHERE id = $1 AND status = TRUE", R::TABLE);
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn find_active_by_field(
        &self,
        field: LookupField,
        value: &str,
    ) -> Result<Option<R>, AppError> {
        let sql = lookup_sql(R::TABLE, field);
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert(&self, input: &R::Input) -> Result<R, AppError> {
        let sql = insert_sql(R::TABLE, R::COLUMNS);
        let record = R::bind_input(sqlx::query_as::<_, R>(&sql), input)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn replace(&self, id: i32, input: &R::Input, status: bool) -> Result<R, AppError> {
        let sql = update_sql(R::TABLE, R::COLUMNS);
        // Sem linha para o id, fetch_one devolve RowNotFound (vira 500 no serviço).
        let record = R::bind_input(sqlx::query_as::<_, R>(&sql), input)
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }

    async fn soft_delete(&self, id: i32) -> Result<R, AppError> {
        let sql = format!(
            "UPDATE {} SET status = FALSE, deleted_at = NOW() WHERE id = $1 RETURNING *",
            R::TABLE
        );
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(record)
    }
}

// ---
// Geração de SQL
// ---

fn lookup_sql(table: &str, field: LookupField) -> String {
    let column = field.column();
    if field.case_insensitive() {
        format!(
            "SELECT * FROM {table} WHERE LOWER({column}) = LOWER($1) AND status = TRUE ORDER BY id ASC LIMIT 1"
        )
    } else {
        format!("SELECT * FROM {table} WHERE {column} = $1 AND status = TRUE ORDER BY id ASC LIMIT 1")
    }
}

fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({}) RETURNING *",
        columns.join(", "),
        placeholders.join(", ")
    )
}

// Colunas em $1..$n, status em $n+1 e o id em $n+2.
fn update_sql(table: &str, columns: &[&str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 1))
        .collect();
    let n = columns.len();
    format!(
        "UPDATE {table} SET {}, status = ${}, updated_at = NOW() WHERE id = ${} RETURNING *",
        assignments.join(", "),
        n + 1,
        n + 2
    )
}

// ---
// Mapeamento das colunas por recurso
// ---

impl PgRecord for Warehouse {
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query.bind(input.name.clone())
    }
}

impl PgRecord for Category {
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query.bind(input.name.clone())
    }
}

impl PgRecord for Role {
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query.bind(input.name.clone())
    }
}

impl PgRecord for Area {
    const COLUMNS: &'static [&'static str] = &["name", "warehouse_id"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query.bind(input.name.clone()).bind(input.warehouse_id)
    }
}

impl PgRecord for Product {
    const COLUMNS: &'static [&'static str] = &["name", "price", "quantity", "category_id", "area_id"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query
            .bind(input.name.clone())
            .bind(input.price)
            .bind(input.quantity)
            .bind(input.category_id)
            .bind(input.area_id)
    }
}

impl PgRecord for User {
    const COLUMNS: &'static [&'static str] = &["name", "username", "email", "password", "role_id"];

    fn bind_input<'q>(query: PgQueryAs<'q, Self>, input: &Self::Input) -> PgQueryAs<'q, Self> {
        query
            .bind(input.name.clone())
            .bind(input.username.clone())
            .bind(input.email.clone())
            .bind(input.password.clone())
            .bind(input.role_id)
    }
}
