// connexion BD + opérations CRUD génériques

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityName, EntityTrait, IntoActiveModel, PrimaryKeyTrait, Schema,
    Statement,
};
use std::fmt::Debug;
use std::time::Duration;
use tracing::info;

use crate::error::AppError;
use crate::models::{
    conversation, erreur, erreur_outil, erreur_solution, logs_interaction, message, outil,
    requete, solution, utilisateur,
};

type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Handle partagé vers la base, injecté dans les handlers via `web::Data<Store>`.
/// Le pool vit du démarrage à l'arrêt du process.
#[derive(Clone)]
pub struct Store {
    conn: DatabaseConnection,
}

impl Store {
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_string());
        opt.max_connections(5)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        Self::connect_with(opt).await
    }

    /// Base SQLite en mémoire, une seule connexion pour que le schéma survive
    pub async fn in_memory() -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        Self::connect_with(opt).await
    }

    pub async fn connect_with(opt: ConnectOptions) -> Result<Self, DbErr> {
        let conn = Database::connect(opt).await?;
        let store = Self { conn };
        store.create_schema().await?;

        info!("Database connected & schema ready");
        Ok(store)
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    // Tables parentes avant les tables enfants (clés étrangères)
    async fn create_schema(&self) -> Result<(), DbErr> {
        let schema = Schema::new(self.conn.get_database_backend());

        self.create_table(&schema, utilisateur::Entity).await?;
        self.create_table(&schema, conversation::Entity).await?;
        self.create_table(&schema, message::Entity).await?;
        self.create_table(&schema, erreur::Entity).await?;
        self.create_table(&schema, solution::Entity).await?;
        self.create_table(&schema, outil::Entity).await?;
        self.create_table(&schema, erreur_outil::Entity).await?;
        self.create_table(&schema, erreur_solution::Entity).await?;
        self.create_table(&schema, logs_interaction::Entity).await?;
        self.create_table(&schema, requete::Entity).await?;

        Ok(())
    }

    async fn create_table<E: EntityTrait>(&self, schema: &Schema, entity: E) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();

        self.conn.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    pub async fn insert<A>(&self, model: A) -> Result<<A::Entity as EntityTrait>::Model, AppError>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.conn).await?)
    }

    /// N'écrit que les colonnes marquées `Set`
    pub async fn update<A>(&self, model: A) -> Result<<A::Entity as EntityTrait>::Model, AppError>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.conn).await?)
    }

    pub async fn list<E: EntityTrait>(&self) -> Result<Vec<E::Model>, AppError> {
        Ok(E::find().all(&self.conn).await?)
    }

    pub async fn get<E, K>(&self, key: K) -> Result<E::Model, AppError>
    where
        E: EntityTrait,
        K: Into<PrimaryKeyOf<E>> + Debug + Clone,
    {
        E::find_by_id(key.clone())
            .one(&self.conn)
            .await?
            .ok_or_else(|| AppError::not_found(E::default().table_name(), key))
    }

    pub async fn delete<E, K>(&self, key: K) -> Result<(), AppError>
    where
        E: EntityTrait,
        K: Into<PrimaryKeyOf<E>> + Debug + Clone,
    {
        let result = E::delete_by_id(key.clone()).exec(&self.conn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(E::default().table_name(), key));
        }
        Ok(())
    }

    /// Vérifie qu'une ligne parente existe avant d'insérer une clé étrangère
    pub async fn ensure_exists<E>(&self, id: i32) -> Result<(), AppError>
    where
        E: EntityTrait,
        i32: Into<PrimaryKeyOf<E>>,
    {
        match E::find_by_id(id).one(&self.conn).await? {
            Some(_) => Ok(()),
            None => Err(AppError::missing_parent(E::default().table_name(), id)),
        }
    }
}
