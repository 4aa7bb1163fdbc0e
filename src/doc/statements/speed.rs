/*!
# `speed <left> <right>`
Abbreviation `sp`.
## Purpose
Sets the speeds, in percent, used by later `motors` statements.

## Example
```text
speed 30 80;
motors 1 1
```

*/
