use serde_json::{json, Value};

/// 单章节、单主题的基础快照
pub fn intro_snapshot(progress: Value) -> Value {
    json!({
        "chapters": [{ "_id": "c1", "name": "Intro" }],
        "topics": [{ "name": "T1", "chapters": ["c1"] }],
        "progress": progress,
    })
}

pub fn course_snapshot() -> Value {
    json!({
        "chapters": [
            { "_id": "c1", "name": "Variables" },
            { "_id": "c2", "name": "Loops" },
            { "_id": "c3", "name": "Functions" },
            { "_id": "c4", "name": "Closures" }
        ],
        "topics": [
            { "name": "Basics", "chapters": ["c1", "c2"] },
            { "name": "Advanced", "chapters": ["c3", "c4", "c2"] }
        ],
        "progress": [
            { "chapterId": "c1", "isCompleted": true },
            { "chapterId": "c2", "isCompleted": false },
            { "chapterId": "c4", "isCompleted": true }
        ]
    })
}

pub fn recommendation(name: &str, topic: &str, reason: &str) -> Value {
    json!({ "type": "chapter", "name": name, "topic": topic, "reason": reason })
}
