//! Reaction kind.

text_enum! {
    /// Direction of a reaction.
    LikeKind {
        /// Upvote.
        Like => "LIKE",
        /// Downvote.
        Dislike => "DISLIKE",
    }
}
