use crate::question::Question;

/// Built-in question set used when no external bank is available.
pub fn demo_questions() -> Vec<Question> {
    vec![
        Question {
            text: "Chan's algorithm is used for computing:".to_string(),
            options: vec![
                "Shortest path between two points".to_string(),
                "Convex hull".to_string(),
                "Area of a polygon".to_string(),
                "Closest distance between two points".to_string(),
            ],
            correct_answer: "Convex hull".to_string(),
            explanation: "Chan's algorithm is an output-sensitive algorithm used to compute \
                          the convex hull set of n points in a 2D or 3D space. Closest pair \
                          algorithm is used to compute the closest distance between two points."
                .to_string(),
        },
        Question {
            text: "Dijkstra's algorithm cannot be applied on:".to_string(),
            options: vec![
                "Directed and weighted graphs".to_string(),
                "Container of objects of similar types".to_string(),
                "Container of objects of mixed types".to_string(),
                "All of the mentioned".to_string(),
            ],
            correct_answer: "Container of objects of similar types".to_string(),
            explanation: "Container of objects of similar types".to_string(),
        },
        Question {
            text: "What is the order of growth of Dijkstra's algorithm if we use an ordered \
                   array for the PQ? Assume there are no self-edges or parallel edges."
                .to_string(),
            options: vec![
                "V".to_string(),
                "EV".to_string(),
                "V²".to_string(),
                "E(logV)".to_string(),
            ],
            correct_answer: "EV".to_string(),
            explanation: "With respect to the PQ, there are V insert operations, V delete-min \
                          operations, and E decrease-key operations. The PQ is at most size V."
                .to_string(),
        },
    ]
}
