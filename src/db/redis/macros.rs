/// Read-through caching for an optional [`Cache`](crate::db::Cache).
///
/// With `Some(cache)`, a hit is returned directly; on a miss `$block` is
/// awaited and a successful value is queued for writing with `$ttl` seconds
/// to live. Errors from `$block` are returned and never cached. A failing
/// cache read is logged and treated as a miss. With `None`, `$block` is
/// simply awaited.
///
/// # Example
/// ```rust,ignore
/// cached!(self.cache.as_ref(), CacheKey::MovieDetails(id.to_string()), TTL, async move {
///     fetch_details(id).await
/// })
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        match $cache {
            Some(cache) => {
                let key = $key;
                let hit = match cache.get_from_cache(&key).await {
                    Ok(hit) => hit,
                    Err(e) => {
                        tracing::warn!(error = %e, key = %key, "Cache read failed, treating as miss");
                        None
                    }
                };
                match hit {
                    Some(value) => Ok(value),
                    None => {
                        let value = $block.await?;
                        cache.set_in_background(&key, &value, $ttl);
                        Ok(value)
                    }
                }
            }
            None => $block.await,
        }
    }};
}
