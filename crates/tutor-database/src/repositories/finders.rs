//! Lookup-by-natural-key finders.
//!
//! Each trait is blanket-implemented for every repository of its entity,
//! so the finders work the same on PostgreSQL and in memory.

use async_trait::async_trait;

use tutor_core::query::{FilterPredicate, Specification};
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, Repository};
use tutor_core::types::StringFilter;
use tutor_entity::{Room, Student, Teacher};

async fn first_matching<E, R, F>(repo: &R, column: &'static str, filter: &F) -> AppResult<Option<E>>
where
    E: Entity,
    R: Repository<E> + ?Sized,
    F: FilterPredicate + Sync,
{
    let spec = Specification::<E>::builder()
        .filter(column, Some(filter))
        .build();
    Ok(repo.find_by_spec(&spec).await?.into_iter().next())
}

/// Finders for teachers.
#[async_trait]
pub trait TeacherRepositoryExt: Repository<Teacher> {
    /// The teacher with exactly this code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Teacher>> {
        first_matching(self, "code", &StringFilter::equal_to(code)).await
    }

    /// Teachers whose full name contains `fragment`, ignoring case.
    async fn find_by_full_name_containing(&self, fragment: &str) -> AppResult<Vec<Teacher>> {
        let spec = Specification::<Teacher>::builder()
            .filter("full_name", Some(&StringFilter::containing(fragment)))
            .build();
        self.find_by_spec(&spec).await
    }
}

impl<R: Repository<Teacher> + ?Sized> TeacherRepositoryExt for R {}

/// Finders for students.
#[async_trait]
pub trait StudentRepositoryExt: Repository<Student> {
    /// The student with exactly this code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Student>> {
        first_matching(self, "code", &StringFilter::equal_to(code)).await
    }
}

impl<R: Repository<Student> + ?Sized> StudentRepositoryExt for R {}

/// Finders for rooms.
#[async_trait]
pub trait RoomRepositoryExt: Repository<Room> {
    /// The room with exactly this code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Room>> {
        first_matching(self, "code", &StringFilter::equal_to(code)).await
    }
}

impl<R: Repository<Room> + ?Sized> RoomRepositoryExt for R {}
