use voice_shopping_list::{ShoppingList, category_of, parse_command, suggestions_for};

fn main() {
    println!("=== Shopping Command Parser Demo ===");

    let transcripts = [
        "Add 2 milk, please!",
        "buy three eggs",
        "find apples",
        "दो दूध जोड़ो",
        "मुझे एप्पल चाहिए",
        "remove all milk",
        "please",
        "",
    ];

    let mut list = ShoppingList::new();

    for transcript in transcripts {
        println!("\nInput: '{}'", transcript);
        let command = parse_command(transcript);
        println!("Parsed: {:?}", command);

        if let Some(item) = command.item.as_deref() {
            println!("Category: {}", category_of(item));
            let related = suggestions_for(item);
            if !related.is_empty() {
                println!("You may also need: {}", related.join(", "));
            }
        }

        println!("Change: {:?}", list.apply(&command));
    }

    println!("\nFinal list: {:?}", list.items());
}
