// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Inventario API", description = "CRUD de inventario con borrado lógico"),
    paths(
        // --- Areas ---
        handlers::areas::get_all,
        handlers::areas::get_one,
        handlers::areas::create,
        handlers::areas::update,
        handlers::areas::delete,

        // --- Categories ---
        handlers::categories::get_all,
        handlers::categories::get_one,
        handlers::categories::create,
        handlers::categories::update,
        handlers::categories::delete,

        // --- Products ---
        handlers::products::get_all,
        handlers::products::get_one,
        handlers::products::create,
        handlers::products::update,
        handlers::products::delete,

        // --- Roles ---
        handlers::roles::get_all,
        handlers::roles::get_one,
        handlers::roles::create,
        handlers::roles::update,
        handlers::roles::delete,

        // --- Users ---
        handlers::users::get_all,
        handlers::users::get_one,
        handlers::users::create,
        handlers::users::update,
        handlers::users::delete,

        // --- Warehouses ---
        handlers::warehouses::get_all,
        handlers::warehouses::get_one,
        handlers::warehouses::create,
        handlers::warehouses::update,
        handlers::warehouses::delete,

        handlers::ping::ping,
    ),
    components(
        schemas(
            models::RecordMeta,
            models::Area,
            models::AreaInput,
            models::Category,
            models::CategoryInput,
            models::Product,
            models::ProductInput,
            models::Role,
            models::RoleInput,
            models::User,
            models::UserInput,
            models::Warehouse,
            models::WarehouseInput,
        )
    ),
    tags(
        (name = "Areas", description = "Áreas dentro de cada armazém"),
        (name = "Categories", description = "Categorias de produtos"),
        (name = "Products", description = "Produtos em estoque"),
        (name = "Roles", description = "Papéis dos usuários"),
        (name = "Users", description = "Usuários do sistema"),
        (name = "Warehouses", description = "Armazéns"),
        (name = "Test", description = "Verificação de disponibilidade")
    )
)]
pub struct ApiDoc;
