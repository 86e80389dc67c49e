#[cfg(test)]
mod tests {
    use crate::*;
    use demo_core::ports::{BackendLoader, ComputeBackend};

    #[test]
    fn test_greet_template() {
        assert_eq!(
            greet("Cloudflare"),
            "Hello, Cloudflare! This message is from Rust and WebAssembly."
        );
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(hello_world(), "Hello, World from Rust and WebAssembly!");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-4, 1), -3);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_timestamp_is_after_2020() {
        assert!(get_timestamp() > 1_577_836_800_000.0);
    }

    #[test]
    fn test_module_backend_matches_exports() {
        let module = ComputeModule;
        assert_eq!(module.greet("Ada").unwrap(), greet("Ada"));
        assert_eq!(module.hello_world().unwrap(), hello_world());
        assert_eq!(module.add(40, 2).unwrap(), 42);
    }

    #[test]
    fn test_linked_loader_never_fails() {
        use std::future::Future;
        use std::task::{Context, Poll, Wake, Waker};
        use std::sync::Arc;

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let loader = LinkedModuleLoader;
        let mut fut = loader.load();
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(backend)) => assert_eq!(backend.add(1, 1).unwrap(), 2),
            _ => panic!("linked loader should resolve immediately"),
        }
    }
}
