//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Author, BlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_first_name: String,
    pub author_last_name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: Author {
                first_name: model.author_first_name,
                last_name: model.author_last_name,
            },
            title: model.title,
            content: model.content,
            created: model.created.into(),
        }
    }
}

/// Conversion from domain BlogPost to SeaORM ActiveModel.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            title: Set(post.title),
            content: Set(post.content),
            created: Set(post.created.into()),
        }
    }
}
