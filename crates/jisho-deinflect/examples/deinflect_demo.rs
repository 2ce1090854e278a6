// Small demo: deinflect a few surface forms and print the candidates.
//
// Run: cargo run -p jisho-deinflect --example deinflect_demo

use jisho_deinflect::Deinflector;

fn main() {
    let engine = Deinflector::new();

    for word in ["走ります", "踊りたくなかった", "食べさせられる", "見る"] {
        println!("{word}");
        for candidate in engine.deinflect(word) {
            let paths: Vec<String> = candidate
                .reasons
                .iter()
                .map(|path| {
                    if path.is_empty() {
                        "(as-is)".to_string()
                    } else {
                        path.iter()
                            .map(|r| r.to_string())
                            .collect::<Vec<_>>()
                            .join(" < ")
                    }
                })
                .collect();
            println!(
                "  {}\t[{}]\t{}",
                candidate.word,
                candidate.class,
                paths.join("; ")
            );
        }
        println!();
    }
}
