// Crate entry point. Declares the module tree so the binary and tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod infrastructure {
        pub mod key_value_storage;
    }
}

pub mod modules {
    pub mod cart {
        pub mod errors;
        pub mod observers;
        pub mod provider;
        pub mod store;
        pub mod core {
            pub mod cart_item;
            pub mod commands;
            pub mod decide;
        }
        pub mod use_cases {
            pub mod load_cart {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod persisted_cart;
                pub mod write_queue;
            }
        }
    }
}

pub mod shell;
