/// Read-through caching over [`Cache`](crate::cache::Cache).
///
/// Looks `$key` up first. On a hit the cached value is returned as `Ok`.
/// On a miss `$block` is awaited, its value is queued for a background write
/// with `$ttl` seconds to live, and returned as `Ok`.
///
/// Errors from the lookup or from `$block` are propagated with `?`, so the
/// surrounding function must return [`AppResult`](crate::error::AppResult).
/// The expression's own `Result` type usually needs an annotation at the
/// binding site.
///
/// # Example
/// ```rust,ignore
/// let batch: AppResult<RecipeBatch> = cached!(self.cache, key, ttl, async move {
///     Ok::<_, AppError>(fetch_batch().await?)
/// });
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            tracing::debug!(key = %$key, "Cache hit");
            Ok(cached)
        } else {
            tracing::debug!(key = %$key, "Cache miss");
            let value = $block.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
