//! Tests for concurrent schema sharing and registry access.

use std::sync::Arc;
use std::thread;

use verdict::{is, Schema, SchemaRegistry, Value};
use serde_json::json;

#[test]
fn test_schema_shared_across_threads() {
    let schema = Arc::new(
        Schema::object()
            .field("name", Schema::string())
            .field("age", Schema::number()),
    );

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let value = Value::from(json!({
                    "name": format!("User{}", i),
                    "age": 20 + i
                }));
                assert!(is(&schema, &value));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registry_validation() {
    let registry = Arc::new(SchemaRegistry::new());
    registry
        .register(
            "User",
            Schema::object()
                .field("name", Schema::string())
                .field("age", Schema::number()),
        )
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let value = Value::from(json!({
                    "name": format!("User{}", i),
                    "age": 20 + i
                }));
                let result = registry.validate("User", value).unwrap();
                assert!(result.is_success());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_validation_with_references() {
    let registry = Arc::new(SchemaRegistry::new());
    registry.register("UserId", Schema::integer()).unwrap();
    registry
        .register(
            "User",
            Schema::object()
                .field("id", registry.reference("UserId"))
                .field("name", Schema::string()),
        )
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let value = Value::from(json!({
                    "id": i + 1,
                    "name": format!("User{}", i)
                }));
                let result = registry.validate("User", value).unwrap();
                assert!(result.is_success());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_registry_clone_shares_storage() {
    let registry = SchemaRegistry::new();
    let cloned = registry.clone();

    // Registration through one handle is visible through the other.
    registry.register("Greeting", Schema::string()).unwrap();
    assert!(cloned.get("Greeting").is_some());

    let handle = thread::spawn(move || {
        let result = cloned.validate("Greeting", Value::from("hello")).unwrap();
        assert!(result.is_success());
    });
    handle.join().unwrap();
}

#[test]
fn test_concurrent_mixed_operations() {
    let registry = Arc::new(SchemaRegistry::new());
    registry
        .register("Item", Schema::object().field("n", Schema::number()))
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                if i % 2 == 0 {
                    let result = registry
                        .validate("Item", Value::from(json!({"n": i})))
                        .unwrap();
                    assert!(result.is_success());
                } else {
                    assert!(registry.get("Item").is_some());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_stress_concurrent_validation() {
    let registry = Arc::new(SchemaRegistry::new());
    registry.register("Email", Schema::string()).unwrap();
    registry.register("UserId", Schema::integer()).unwrap();
    registry
        .register(
            "User",
            Schema::object()
                .field("id", registry.reference("UserId"))
                .field("email", registry.reference("Email"))
                .field("name", Schema::string()),
        )
        .unwrap();

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for j in 0..10 {
                    let value = Value::from(json!({
                        "id": i * 10 + j + 1,
                        "email": format!("user{}@example.com", i),
                        "name": format!("User {}", i)
                    }));
                    let result = registry.validate("User", value).unwrap();
                    assert!(result.is_success());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
