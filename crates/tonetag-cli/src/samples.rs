//! Built-in demo texts for `tonetag samples`.

pub(crate) const SAMPLES_HEADER: &str = "=== Sample Text Sentiment Analysis ===";

pub(crate) const SAMPLE_TEXTS: &[&str] = &[
    "I absolutely love this product! It exceeded all my expectations.",
    "The weather is amazing today, I feel so happy.",
    "This is the best movie I've seen in years.",
    "I had a great time at the concert. The band was incredible!",
    "I'm so grateful for all the support I\u{2019}ve received. Feeling very positive.",
    "I hate waiting in long lines. It's so frustrating.",
    "The service here was terrible. I won\u{2019}t be coming back.",
    "I am very disappointed with the product. It broke after one use.",
    "I can't stand this kind of weather. It's too hot and uncomfortable.",
    "This is the worst decision I\u{2019}ve made. I regret it deeply.",
    "It\u{2019}s okay, but nothing special.",
    "The book was alright. Some parts were interesting, others not so much.",
    "I\u{2019}m not sure how I feel about it yet.",
    "It was an average experience. Neither good nor bad.",
    "The food was fine, nothing extraordinary.",
];
