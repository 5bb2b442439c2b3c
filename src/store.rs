use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait, sea_query::Expr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies ordered by ascending rating, ties broken by id.
    pub async fn list_by_rating(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<movie::Model>> {
        let movie = movie::Entity::find_by_id(id).one(&self.db).await?;
        Ok(movie)
    }

    /// Inserts a new movie. A second movie with the same title is a
    /// conflict, not a duplicate row.
    pub async fn insert(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title.clone()),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(0),
            review: Set(new.review),
            img_url: Set(new.img_url),
        };

        match model.insert(&self.db).await {
            Ok(movie) => Ok(movie),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(format!(
                    "a movie titled \"{}\" is already in the list",
                    new.title
                ))),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn update_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let Some(movie) = self.find(id).await? else {
            return Err(AppError::NotFound("movie"));
        };

        let mut active: movie::ActiveModel = movie.into();
        active.rating = Set(rating);
        active.review = Set(review);

        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("movie"));
        }
        Ok(())
    }

    /// Persists a full rank assignment in one transaction so a concurrent
    /// list view never observes a half-applied permutation.
    pub async fn save_rankings(&self, ranks: &[(i32, i32)]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        for &(id, ranking) in ranks {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(ranking))
                .filter(movie::Column::Id.eq(id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }
}
