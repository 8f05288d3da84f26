use datafaker_generate::DataType;

fn main() {
    for data_type in DataType::ALL {
        println!("{:<10} {}", data_type.as_str(), data_type.description());
    }
}
