pub mod shared {
    pub mod infrastructure {
        pub mod codec;
        pub mod dataset_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod batch;
            pub mod event;
        }
        pub mod use_cases {
            pub mod ingest_batch {
                pub mod decode;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod inspect_all {
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod dataset_queries;
            }
        }
    }
}

pub mod shell;
