pub mod application {
    pub mod image {
        pub mod crop;
    }
    pub mod item {
        pub mod get_expiry_overview;
    }
    pub mod product {
        pub mod analyze_image;
        pub mod identify;
        pub mod resolve;
    }
}

pub mod domain {
    pub mod logger;
    pub mod calendar {
        pub mod date_input;
        pub mod model;
        pub mod normalizer;
    }
    pub mod image {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod crop;
        }
    }
    pub mod item {
        pub mod expiry;
        pub mod filter;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_expiry_overview;
        }
    }
    pub mod product {
        pub mod category;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod analyze_image;
            pub mod identify;
            pub mod resolve;
        }
    }
    pub mod settings {
        pub mod context;
        pub mod errors;
        pub mod model;
    }
    pub mod shared {
        pub mod clock;
    }
}
