use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, TransactionError,
    TransactionTrait,
};

/// Whole-collection set: delete every stored row of the entity, then insert
/// the supplied rows, inside one transaction. A failure partway rolls back
/// and leaves the previous contents untouched. An empty input is valid and
/// empties the collection.
///
/// Atomicity is per call; two concurrent replaces of the same collection
/// still race (last writer wins). Acceptable for a single-admin deployment.
pub async fn replace_collection<A>(db: &DatabaseConnection, rows: Vec<A>) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    db.transaction::<_, (), DbErr>(move |txn| {
        Box::pin(async move {
            <A::Entity as EntityTrait>::delete_many().exec(txn).await?;

            if !rows.is_empty() {
                <A::Entity as EntityTrait>::insert_many(rows)
                    .exec_without_returning(txn)
                    .await?;
            }

            Ok(())
        })
    })
    .await
    .map_err(flatten_transaction_error)
}

fn flatten_transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) => e,
        TransactionError::Transaction(e) => e,
    }
}
