/// (question, category, difficulty, description)
pub const SAMPLE_QUESTIONS: &[(&str, &str, &str, &str)] = &[
    (
        "What is the OSI model?",
        "Networking",
        "Medium",
        "Explain the seven layers of the OSI model and their functions.",
    ),
    (
        "Explain ACID properties in database systems.",
        "DBMS",
        "Medium",
        "Define Atomicity, Consistency, Isolation, and Durability.",
    ),
    (
        "What is a deadlock in operating systems?",
        "OS",
        "Hard",
        "Explain deadlocks, their conditions, and prevention strategies.",
    ),
    (
        "Explain SQL injection and how to prevent it.",
        "Cybersecurity",
        "Easy",
        "Describe SQL injection attacks and best practices to prevent them.",
    ),
    (
        "Explain the difference between TCP and UDP protocols.",
        "Networking",
        "Medium",
        "Compare connection handling, reliability and typical use cases.",
    ),
    (
        "What is the difference between process and thread?",
        "OS",
        "Easy",
        "Cover address spaces, scheduling and the cost of context switches.",
    ),
    (
        "What is a RESTful API?",
        "Backend",
        "Easy",
        "Describe the REST constraints and how resources map onto HTTP verbs.",
    ),
    (
        "How would you design a rate limiter?",
        "Backend",
        "Hard",
        "Discuss token bucket and sliding window approaches in a distributed setting.",
    ),
    (
        "What is the virtual DOM?",
        "Frontend",
        "Medium",
        "Explain diffing, reconciliation and when it helps performance.",
    ),
    (
        "Explain the CSS box model.",
        "Frontend",
        "Easy",
        "Describe content, padding, border and margin, and the box-sizing property.",
    ),
];
