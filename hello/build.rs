fn main() {
    gateway_buildinfo::emit();
}
