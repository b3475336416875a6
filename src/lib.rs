pub mod shared {
    pub mod inbound {
        pub mod http;
    }
    pub mod infrastructure {
        pub mod collection;
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod id;
            pub mod product;
        }
        pub mod store;
        pub mod use_cases {
            pub mod list_products {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_product {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod carts {
        pub mod core {
            pub mod cart;
        }
        pub mod store;
        pub mod use_cases {
            pub mod list_cart_products {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_product_to_cart {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_cart {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
