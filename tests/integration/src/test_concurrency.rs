//! A single context verifying many requests in parallel.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use gav_auth::{AuthErrorKind, CredentialProvider, SigningContext};

    use crate::{credential_provider, signed_request};

    #[test]
    fn test_should_verify_in_parallel_threads() {
        let ctx = Arc::new(SigningContext::default());
        let provider: Arc<dyn CredentialProvider> = Arc::new(credential_provider());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ctx = Arc::clone(&ctx);
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    let body = format!("payload #{i}").into_bytes();
                    let parts = signed_request(
                        &ctx,
                        "POST",
                        &format!("/jobs/{i}"),
                        "build-agent",
                        b"a much longer shared secret value",
                        &body,
                    );
                    ctx.authenticate(&parts, &body, provider.as_ref())
                        .map(|r| r.principal_id.to_string())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "build-agent");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_verify_in_parallel_tasks() {
        let ctx = Arc::new(SigningContext::default());
        let provider: Arc<dyn CredentialProvider> = Arc::new(credential_provider());

        let mut tasks = Vec::new();
        for i in 0..32_u32 {
            let ctx = Arc::clone(&ctx);
            let provider = Arc::clone(&provider);
            tasks.push(tokio::spawn(async move {
                let body = i.to_be_bytes();
                let parts = signed_request(&ctx, "PUT", "/counter", "123", b"abcde", &body);
                // Odd tasks verify against a different body.
                let checked: &[u8] = if i % 2 == 0 { &body[..] } else { &b"other"[..] };
                ctx.authenticate(&parts, checked, provider.as_ref())
                    .map_err(|e| e.kind())
            }));
        }

        for (i, task) in tasks.into_iter().enumerate() {
            let result = task.await.unwrap();
            if i % 2 == 0 {
                assert_eq!(result.unwrap().principal_id.as_str(), "123");
            } else {
                assert_eq!(result.unwrap_err(), AuthErrorKind::Md5Mismatch);
            }
        }
    }
}
