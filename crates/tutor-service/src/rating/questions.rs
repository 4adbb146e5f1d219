//! Linking follow-up questions to a rating.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use tutor_core::error::AppError;
use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::traits::{Entity, Repository};
use tutor_core::types::LongFilter;
use tutor_entity::{Aggregate, Question, Rating};

use crate::context::RequestContext;
use crate::mapper::EntityMapper;
use crate::question::{QuestionDto, QuestionMapper};

/// Maintains the question set of a rating through its [`Aggregate`].
#[derive(Clone)]
pub struct RatingQuestionService {
    ratings: Arc<dyn Repository<Rating>>,
    questions: Arc<dyn Repository<Question>>,
}

impl RatingQuestionService {
    /// Creates the service over the rating and question repositories.
    pub fn new(
        ratings: Arc<dyn Repository<Rating>>,
        questions: Arc<dyn Repository<Question>>,
    ) -> Self {
        Self { ratings, questions }
    }

    /// Questions currently linked to `rating_id`, ordered by id.
    pub async fn questions_of(&self, rating_id: i64) -> AppResult<Vec<QuestionDto>> {
        let linked = self.linked(rating_id).await?;
        Ok(linked.iter().map(QuestionMapper::to_dto).collect())
    }

    /// Make `question_ids` the complete question set of the rating.
    ///
    /// Questions no longer in the set get their rating cleared, new ones
    /// are pointed at the rating. Returns `None` when the rating does not
    /// exist; an unknown question id is a not-found error and writes
    /// nothing.
    pub async fn replace_questions(
        &self,
        ctx: &RequestContext,
        rating_id: i64,
        question_ids: &[i64],
    ) -> AppResult<Option<Vec<QuestionDto>>> {
        let Some(rating) = self.ratings.find_by_id(rating_id).await? else {
            return Ok(None);
        };

        let current = self.linked(rating_id).await?;
        let previously: BTreeSet<i64> = current.iter().filter_map(|q| q.id).collect();

        let mut requested = Vec::with_capacity(question_ids.len());
        for &id in question_ids {
            let question = self
                .questions
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Question {id} not found")))?;
            requested.push(question);
        }

        let mut aggregate = Aggregate::new(rating, current);
        let detached = aggregate.replace(requested);

        for question in &detached {
            if let Some(id) = question.id {
                self.relink(ctx, id, None).await?;
            }
        }

        let mut linked = Vec::with_capacity(aggregate.children().len());
        for question in aggregate.children() {
            let Some(id) = question.id else { continue };
            if previously.contains(&id) {
                linked.push(question.clone());
            } else if let Some(stored) = self.relink(ctx, id, Some(rating_id)).await? {
                linked.push(stored);
            }
        }
        linked.sort_by_key(|q| q.id);

        info!(
            rating_id,
            detached = detached.len(),
            linked = linked.len(),
            actor = %ctx.actor,
            "Replaced rating questions"
        );
        Ok(Some(linked.iter().map(QuestionMapper::to_dto).collect()))
    }

    async fn linked(&self, rating_id: i64) -> AppResult<Vec<Question>> {
        let spec = Specification::<Question>::builder()
            .filter("rating_id", Some(&LongFilter::equal_to(rating_id)))
            .build();
        self.questions.find_by_spec(&spec).await
    }

    async fn relink(
        &self,
        ctx: &RequestContext,
        question_id: i64,
        rating_id: Option<i64>,
    ) -> AppResult<Option<Question>> {
        let actor = ctx.actor.clone();
        let at = ctx.request_time;
        self.questions
            .update_with(
                question_id,
                Box::new(move |stored: &mut Question| {
                    stored.rating_id = rating_id;
                    stored.audit_mut().mark_modified(&actor, at);
                    Ok(())
                }),
            )
            .await
    }
}
